//! definition/size.rs
//! Structure size calculator.

use crate::definition::parse::parse_descriptor;
use crate::definition::types::StructDefinition;
use crate::types::CodecError;

/// Sum of `width * count` over every field.
pub fn size_of(def: &StructDefinition) -> usize {
    def.iter().map(|f| f.descriptor.byte_len()).sum()
}

/// Size of a definition still in text form.
///
/// # Errors
/// `CodecError::UnsupportedType` if any descriptor names an unknown tag.
pub fn size_of_text<I, K, V>(pairs: I) -> Result<usize, CodecError>
where
    I: IntoIterator<Item = (K, V)>,
    V: AsRef<str>,
{
    pairs.into_iter().try_fold(0usize, |acc, (_, text)| {
        Ok(acc + parse_descriptor(text.as_ref())?.byte_len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_width_times_count() {
        let def = StructDefinition::parse([
            ("tag", "CHAR[4]"),
            ("len", "UINT32"),
            ("rgb", "UINT24[2]|BE"),
            ("scale", "FLOAT64"),
        ])
        .unwrap();
        assert_eq!(size_of(&def), 4 + 4 + 6 + 8);
    }

    #[test]
    fn empty_definition_is_zero() {
        assert_eq!(size_of(&StructDefinition::new()), 0);
    }

    #[test]
    fn text_form_rejects_unknown_tag() {
        let err = size_of_text([("a", "UINT8"), ("b", "NIBBLE")]).unwrap_err();
        assert_eq!(err, CodecError::UnsupportedType { tag: "NIBBLE".into() });
    }
}
