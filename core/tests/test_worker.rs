// Out-of-line worker pool: buffer ownership goes in with the request and
// comes back with the response; counters aggregate across workers.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytefields_core::{
        config::CodecConfig,
        definition::{ByteOrder, StructDefinition},
        types::CodecError,
        value::{Record, Value},
        worker::{CodecWorkerPool, Outcome, Request, WorkerConfig},
    };

    fn header_def() -> Arc<StructDefinition> {
        Arc::new(
            StructDefinition::parse([("magic", "CHAR[4]"), ("count", "UINT16|BE")]).unwrap(),
        )
    }

    #[test]
    fn decode_returns_buffer_and_result() {
        let pool = CodecWorkerPool::new(WorkerConfig::single_threaded()).unwrap();
        let buffer = b"JUNKHEAD\x00\x2a".to_vec();

        let (buffer, result) = pool.decode(buffer, header_def(), 4).unwrap();
        assert_eq!(buffer, b"JUNKHEAD\x00\x2a".to_vec());
        assert!(!result.error);
        assert_eq!(result.end, 10);
        assert_eq!(result.data["magic"], Value::Text("HEAD".into()));
        assert_eq!(result.data["count"], Value::UInt(42));
    }

    #[test]
    fn encode_writes_into_moved_buffer() {
        let pool = CodecWorkerPool::new(WorkerConfig::single_threaded()).unwrap();
        let record = Record::new().with("magic", "RIFF").with("count", 258u16);

        let out = pool.encode(vec![0u8; 6], header_def(), record, 0).unwrap();
        assert!(!out.error);
        assert_eq!(out.buffer, b"RIFF\x01\x02".to_vec());
    }

    #[test]
    fn search_then_decode() {
        let pool = CodecWorkerPool::new(WorkerConfig::default().with_workers(2)).unwrap();
        let buffer = b"....HEAD\x00\x07".to_vec();

        let (buffer, at) = pool.search(buffer, "HEAD", 0).unwrap();
        assert_eq!(at, Some(4));
        let (_, result) = pool.decode(buffer, header_def(), at.unwrap()).unwrap();
        assert_eq!(result.data["count"], Value::UInt(7));

        let (_, missing) = pool.search(vec![0, 1, 2, 3], vec![9u8], 0).unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn schema_error_keeps_buffer_in_response() {
        let pool = CodecWorkerPool::new(WorkerConfig::single_threaded()).unwrap();
        let response = pool
            .call(Request::Encode {
                buffer: vec![0xAB; 6],
                definition: header_def(),
                record: Record::new().with("magic", "RIFF"),
                offset: 0,
            })
            .unwrap();

        assert_eq!(response.buffer, vec![0xAB; 6]);
        assert_eq!(
            response.outcome,
            Err(CodecError::MissingField { field: "count".into() })
        );
        assert_eq!(pool.snapshot().counters.schema_errors, 1);
    }

    #[test]
    fn workers_use_pool_codec_config() {
        let config = WorkerConfig::single_threaded()
            .with_codec(CodecConfig::default().with_default_order(ByteOrder::Big));
        let pool = CodecWorkerPool::new(config).unwrap();
        let def = Arc::new(StructDefinition::parse([("v", "UINT16")]).unwrap());

        let response = pool
            .call(Request::Decode { buffer: vec![0x01, 0x00], definition: def, offset: 0 })
            .unwrap();
        match response.outcome {
            Ok(Outcome::Decoded(r)) => assert_eq!(r.data["v"], Value::UInt(0x0100)),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn many_requests_in_flight() {
        let pool = CodecWorkerPool::new(WorkerConfig::default().with_workers(4)).unwrap();
        let def = Arc::new(StructDefinition::parse([("v", "UINT32|LE")]).unwrap());

        let pending: Vec<_> = (0u32..32)
            .map(|i| {
                pool.submit(Request::Decode {
                    buffer: i.to_le_bytes().to_vec(),
                    definition: Arc::clone(&def),
                    offset: 0,
                })
                .unwrap()
            })
            .collect();

        for (i, p) in pending.into_iter().enumerate() {
            let response = p.wait().unwrap();
            match response.outcome {
                Ok(Outcome::Decoded(r)) => assert_eq!(r.data["v"], Value::UInt(i as u64)),
                other => panic!("unexpected outcome: {other:?}"),
            }
        }

        let snap = pool.snapshot();
        assert_eq!(snap.counters.decode_calls, 32);
        assert_eq!(snap.counters.bytes_read, 128);
        assert_eq!(snap.counters.data_errors, 0);
        pool.shutdown();
    }

    #[test]
    fn short_buffer_is_data_error_not_transport_error() {
        let pool = CodecWorkerPool::new(WorkerConfig::single_threaded()).unwrap();
        let (buffer, result) = pool.decode(vec![b'R', b'I'], header_def(), 0).unwrap();
        assert_eq!(buffer.len(), 2);
        assert!(result.error);
        assert_eq!(result.end, 0);
        assert_eq!(pool.snapshot().counters.data_errors, 1);
    }

    #[test]
    fn transport_errors_are_their_own_class() {
        let err = CodecError::Transport("worker pool is shut down".into());
        assert!(!err.is_schema_error());
        assert!(CodecError::UnsupportedType { tag: "X".into() }.is_schema_error());
    }
}
