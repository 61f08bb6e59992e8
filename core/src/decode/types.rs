use crate::value::Record;

/// Outcome of one decode call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodeResult {
    /// Every field read before the walk stopped (all of them on success).
    pub data: Record,
    /// Byte index just past the last fully read field.
    pub end: usize,
    /// Set when a field did not fit or `end != offset + size_of(definition)`.
    pub error: bool,
}

impl DecodeResult {
    pub fn is_complete(&self) -> bool {
        !self.error
    }

    /// Bytes consumed from `offset`.
    pub fn consumed(&self, offset: usize) -> usize {
        self.end.saturating_sub(offset)
    }
}
