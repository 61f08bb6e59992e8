/// Outcome of an owned encode call. The buffer always comes back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeResult {
    pub buffer: Vec<u8>,
    /// Byte index just past the last fully written field.
    pub end: usize,
    /// Set when a field did not fit or `end != offset + size_of(definition)`.
    pub error: bool,
}

impl EncodeResult {
    pub fn is_complete(&self) -> bool {
        !self.error
    }

    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }
}

/// Outcome of an in-place encode over a borrowed slice.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeProgress {
    pub end: usize,
    pub error: bool,
}
