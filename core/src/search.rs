//! search.rs
//! First-occurrence byte search.
//!
//! Single forward pass from `offset`, first-byte check before the full
//! comparison, no wraparound. `None` is the not-found sentinel.

use std::borrow::Cow;
use std::fmt;

/// Byte pattern to look for. Text converts one byte per char (low byte),
/// matching how CHAR fields are encoded.
#[derive(Clone, PartialEq, Eq)]
pub struct Pattern<'a>(Cow<'a, [u8]>);

impl<'a> Pattern<'a> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_owned(self) -> Vec<u8> {
        self.0.into_owned()
    }
}

impl fmt::Debug for Pattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern(0x{})", hex::encode(&self.0))
    }
}

impl<'a> From<&'a [u8]> for Pattern<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Pattern(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Pattern<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Pattern(Cow::Borrowed(bytes.as_slice()))
    }
}

impl<'a> From<&'a Vec<u8>> for Pattern<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Pattern(Cow::Borrowed(bytes.as_slice()))
    }
}

impl From<Vec<u8>> for Pattern<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        Pattern(Cow::Owned(bytes))
    }
}

impl From<&str> for Pattern<'static> {
    fn from(text: &str) -> Self {
        Pattern(Cow::Owned(text.chars().map(|c| c as u32 as u8).collect()))
    }
}

impl From<String> for Pattern<'static> {
    fn from(text: String) -> Self {
        Pattern::from(text.as_str())
    }
}

/// Index of the first occurrence of `pattern` in `buf` at or after `offset`.
///
/// Returns `None` when there is no such occurrence, when the pattern is empty
/// or when `offset` is past the end of the buffer.
pub fn search<'p>(buf: &[u8], pattern: impl Into<Pattern<'p>>, offset: usize) -> Option<usize> {
    let pattern: Pattern<'p> = pattern.into();
    find(buf, pattern.as_bytes(), offset)
}

/// Slice form of [`search`].
pub fn find(buf: &[u8], needle: &[u8], offset: usize) -> Option<usize> {
    let (&first, _) = needle.split_first()?;
    if offset >= buf.len() || buf.len() - offset < needle.len() {
        return None;
    }

    let last_start = buf.len() - needle.len();
    (offset..=last_start).find(|&i| buf[i] == first && &buf[i..i + needle.len()] == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_occurrence() {
        let buf = b"xxdataxxdata";
        assert_eq!(search(buf, "data", 0), Some(2));
        assert_eq!(search(buf, "data", 3), Some(8));
        assert_eq!(search(buf, "data", 9), None);
    }

    #[test]
    fn missing_byte_is_not_found() {
        assert_eq!(search(&[0u8, 1, 2, 3], &[9u8], 0), None);
    }

    #[test]
    fn pattern_at_very_end() {
        assert_eq!(search(&[0u8, 1, 2, 3], &[2u8, 3], 0), Some(2));
        assert_eq!(search(&[0u8, 1, 2, 3], &[3u8, 4], 0), None);
    }

    #[test]
    fn empty_pattern_and_bad_offset() {
        assert_eq!(search(&[1u8, 2], Vec::<u8>::new(), 0), None);
        assert_eq!(search(&[1u8, 2], &[1u8], 5), None);
    }

    #[test]
    fn text_pattern_uses_low_byte() {
        let buf = [0x00, 0xE9, 0x41];
        assert_eq!(search(&buf, "\u{e9}A", 0), Some(1));
    }
}
