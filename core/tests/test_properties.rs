// Property tests: round trip, byte-order symmetry and the search law.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use bytefields_core::{
        decode::decode,
        definition::StructDefinition,
        encode::{encode, encode_to_vec},
        search::search,
        value::{Record, Value},
    };

    fn mixed_definition() -> StructDefinition {
        StructDefinition::parse([
            ("a", "INT8"),
            ("b", "UINT16|BE"),
            ("c", "INT24|LE"),
            ("d", "UINT24|BE"),
            ("e", "INT32|LE"),
            ("f", "UINT32|BE[2]"),
            ("g", "INT64|LE"),
            ("h", "UINT64|BE"),
            ("i", "FLOAT32|BE"),
            ("j", "FLOAT64|LE[2]"),
            ("k", "CHAR[5]"),
        ])
        .unwrap()
    }

    fn not_nan32() -> impl Strategy<Value = f32> {
        any::<f32>().prop_filter("NaN never compares equal", |f| !f.is_nan())
    }

    fn not_nan64() -> impl Strategy<Value = f64> {
        any::<f64>().prop_filter("NaN never compares equal", |f| !f.is_nan())
    }

    prop_compose! {
        fn mixed_record()(
            a in any::<i8>(),
            b in any::<u16>(),
            c in -(1i32 << 23)..(1i32 << 23),
            d in 0u32..(1u32 << 24),
            e in any::<i32>(),
            f in any::<[u32; 2]>(),
            g in any::<i64>(),
            h in any::<u64>(),
            i in not_nan32(),
            j in (not_nan64(), not_nan64()),
            k in proptest::collection::vec(any::<u8>(), 5),
        ) -> Record {
            Record::new()
                .with("a", a)
                .with("b", b)
                .with("c", c)
                .with("d", d)
                .with("e", e)
                .with("f", f.to_vec())
                .with("g", g)
                .with("h", h)
                .with("i", i)
                .with("j", vec![j.0, j.1])
                .with("k", k.iter().map(|&b| b as char).collect::<String>())
        }
    }

    fn integer_tags() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("UINT16"),
            Just("INT16"),
            Just("UINT24"),
            Just("INT24"),
            Just("UINT32"),
            Just("INT32"),
            Just("UINT64"),
            Just("INT64"),
        ]
    }

    proptest! {
        // Record -> bytes -> record
        #[test]
        fn prop_record_round_trip(record in mixed_record()) {
            let def = mixed_definition();
            let bytes = encode_to_vec(&def, &record).unwrap();
            prop_assert_eq!(bytes.len(), def.byte_size());

            let decoded = decode(&bytes, &def, 0);
            prop_assert!(!decoded.error);
            prop_assert_eq!(decoded.end, def.byte_size());
            prop_assert_eq!(decoded.data, record);
        }

        // Bytes -> record -> bytes, NaN payloads included
        #[test]
        fn prop_bytes_round_trip(seed in proptest::collection::vec(any::<u8>(), 48)) {
            let def = StructDefinition::parse([
                ("x", "UINT8"),
                ("y", "INT24|BE[3]"),
                ("z", "UINT64|LE"),
                ("w", "FLOAT64|BE"),
                ("n", "CHAR[6]"),
                ("m", "INT32"),
                ("f", "FLOAT32|LE[2]"),
            ]).unwrap();
            prop_assert_eq!(def.byte_size(), 1 + 9 + 8 + 8 + 6 + 4 + 8);

            let decoded = decode(&seed[..44], &def, 0);
            prop_assert!(!decoded.error);
            let out = encode(seed.clone(), &def, &decoded.data, 0).unwrap();
            prop_assert_eq!(out.buffer, seed);
        }

        // LE on bytes == BE on reversed bytes
        #[test]
        fn prop_endianness_symmetry(tag in integer_tags(), seed in any::<[u8; 8]>()) {
            let le = StructDefinition::parse([("v", format!("{tag}|LE"))]).unwrap();
            let be = StructDefinition::parse([("v", format!("{tag}|BE"))]).unwrap();
            let width = le.byte_size();
            let bytes = &seed[..width];
            let reversed: Vec<u8> = bytes.iter().rev().copied().collect();

            let a = decode(bytes, &le, 0).data;
            let b = decode(&reversed, &be, 0).data;
            prop_assert_eq!(&a, &b);

            let same_order = decode(bytes, &be, 0).data;
            if bytes != reversed.as_slice() {
                prop_assert_ne!(&a["v"], &same_order["v"]);
            }
        }

        // First occurrence at or after k, or None
        #[test]
        fn prop_search_first_match(
            buf in proptest::collection::vec(0u8..4, 0..64),
            pattern in proptest::collection::vec(0u8..4, 1..4),
            k in 0usize..70,
        ) {
            let expected = (k..buf.len())
                .find(|&i| buf.len() - i >= pattern.len() && buf[i..i + pattern.len()] == pattern[..]);
            prop_assert_eq!(search(&buf, &pattern, k), expected);
        }

        // Short buffers stop exactly at the first field that does not fit
        #[test]
        fn prop_boundary(len in 0usize..16) {
            let def = StructDefinition::parse([
                ("a", "UINT32"),
                ("b", "UINT32"),
                ("c", "UINT64"),
            ]).unwrap();
            let buf = vec![0u8; len];
            let r = decode(&buf, &def, 0);
            let expected_end = match len {
                0..=3 => 0,
                4..=7 => 4,
                _ => 8,
            };
            prop_assert!(r.error);
            prop_assert_eq!(r.end, expected_end);
            prop_assert!(matches!(r.data.get("a"), Some(Value::UInt(0))) == (len >= 4));
        }
    }
}
