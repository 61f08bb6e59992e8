use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{ORDER_BE, ORDER_LE};
use crate::registry::TypeTag;
use crate::types::CodecError;

/// Byte order of a multi-byte value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Native order of the platform this process runs on.
    #[inline]
    pub const fn host() -> Self {
        if cfg!(target_endian = "little") {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    #[inline]
    pub const fn is_little(self) -> bool {
        matches!(self, ByteOrder::Little)
    }

    pub const fn modifier(self) -> &'static str {
        match self {
            ByteOrder::Little => ORDER_LE,
            ByteOrder::Big => ORDER_BE,
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::host()
    }
}

/// One field's layout: tag, repeat count and optional explicit byte order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Descriptor {
    pub tag: TypeTag,
    /// Always >= 1.
    pub count: u32,
    pub order: Option<ByteOrder>,
}

impl Descriptor {
    pub fn new(tag: TypeTag) -> Self {
        Self { tag, count: 1, order: None }
    }

    pub fn repeated(mut self, count: u32) -> Self {
        self.count = count.max(1);
        self
    }

    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Bytes occupied by the whole field (`width * count`).
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.tag.width() * self.count as usize
    }

    /// Explicit order if any, otherwise `default`.
    #[inline]
    pub fn resolved_order(&self, default: ByteOrder) -> ByteOrder {
        self.order.unwrap_or(default)
    }

    /// Decodes to a sequence (or, for CHAR, to text) rather than a scalar.
    #[inline]
    pub fn is_repeated(&self) -> bool {
        self.count > 1
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)?;
        if self.count != 1 {
            write!(f, "[{}]", self.count)?;
        }
        if let Some(order) = self.order {
            write!(f, "|{}", order.modifier())?;
        }
        Ok(())
    }
}

impl FromStr for Descriptor {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse::parse_descriptor(s)
    }
}

/// Named field of a structure definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub descriptor: Descriptor,
}

/// Ordered field name -> descriptor mapping.
///
/// Duplicate names are accepted as written; decoding such a definition
/// overwrites the earlier value in the record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructDefinition {
    fields: Vec<Field>,
}

impl StructDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `(name, descriptor text)` pairs in order.
    ///
    /// # Errors
    /// `CodecError::UnsupportedType` on the first descriptor with an unknown tag.
    pub fn parse<I, K, V>(pairs: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut def = Self::new();
        for (name, text) in pairs {
            def.push(name, super::parse::parse_descriptor(text.as_ref())?);
        }
        Ok(def)
    }

    /// Read a definition from a JSON object (`{"name": "UINT16|BE", ...}`),
    /// keeping the object's key order.
    pub fn from_json(text: &str) -> Result<Self, CodecError> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)?;
        let mut def = Self::new();
        for (name, value) in map {
            let Some(descriptor) = value.as_str() else {
                return Err(CodecError::InvalidDefinition(format!(
                    "field {name:?}: descriptor must be a string, got {value}"
                )));
            };
            def.push(name, super::parse::parse_descriptor(descriptor)?);
        }
        Ok(def)
    }

    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Append a field. A zero repeat count is stored as 1.
    pub fn push(&mut self, name: impl Into<String>, descriptor: Descriptor) {
        self.fields.push(Field {
            name: name.into(),
            descriptor: descriptor.repeated(descriptor.count),
        });
    }

    /// Builder form of [`push`](Self::push).
    pub fn field(mut self, name: impl Into<String>, descriptor: Descriptor) -> Self {
        self.push(name, descriptor);
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.descriptor)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total bytes covered by the definition.
    pub fn byte_size(&self) -> usize {
        super::size::size_of(self)
    }
}

impl<'a> IntoIterator for &'a StructDefinition {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Serialize for StructDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.descriptor.to_string())?;
        }
        map.end()
    }
}

struct DefinitionVisitor;

impl<'de> Visitor<'de> for DefinitionVisitor {
    type Value = StructDefinition;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of field names to descriptor strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StructDefinition, A::Error> {
        let mut def = StructDefinition::new();
        while let Some((name, text)) = access.next_entry::<String, String>()? {
            let descriptor = super::parse::parse_descriptor(&text)
                .map_err(|e| de::Error::custom(format!("field {name:?}: {e}")))?;
            def.push(name, descriptor);
        }
        Ok(def)
    }
}

impl<'de> Deserialize<'de> for StructDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DefinitionVisitor)
    }
}
