use thiserror::Error;

/// Hard failures of the codec.
///
/// Data errors (a buffer too short for the next field, a size mismatch) are
/// *not* represented here: they are reported through the `error` flag of
/// `DecodeResult` / `EncodeResult` together with the partial progress.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Descriptor names a tag outside the closed registry (malformed schema).
    #[error("unsupported type: {tag:?}")]
    UnsupportedType { tag: String },

    /// Record handed to encode lacks a field declared by the definition.
    #[error("record has no value for field {field:?}")]
    MissingField { field: String },

    /// Record value does not fit the shape or kind of its descriptor.
    #[error("field {field:?}: expected {expected}, found {found}")]
    ValueMismatch {
        field: String,
        expected: String,
        found: String,
    },

    /// Serialized definition could not be read.
    #[error("invalid structure definition: {0}")]
    InvalidDefinition(String),

    /// Serialized configuration could not be read.
    #[error("invalid codec configuration: {0}")]
    InvalidConfig(String),

    /// Persisted telemetry payload could not be read back.
    #[error("corrupt telemetry payload: {0}")]
    Telemetry(String),

    /// Out-of-line delegation channel failed (worker gone, reply dropped).
    #[error("transport error: {0}")]
    Transport(String),
}

impl CodecError {
    /// True for errors raised by a malformed schema or record, as opposed to
    /// a failing delegation channel.
    pub fn is_schema_error(&self) -> bool {
        !matches!(self, CodecError::Transport(_))
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::InvalidDefinition(e.to_string())
    }
}
