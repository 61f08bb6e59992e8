//! config.rs
//! Engine configuration.
//!
//! The host byte order is resolved once (at compile time, from
//! `target_endian`) and handed to the engines through `CodecConfig` rather
//! than looked up at each read.

use serde::{Deserialize, Serialize};

use crate::definition::ByteOrder;
use crate::types::CodecError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Order used by descriptors without an explicit `|LE` / `|BE`.
    pub default_order: ByteOrder,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_order: ByteOrder::host(),
        }
    }
}

impl CodecConfig {
    pub fn host() -> Self {
        Self::default()
    }

    pub fn with_default_order(mut self, order: ByteOrder) -> Self {
        self.default_order = order;
        self
    }

    /// Load from JSON, e.g. `{"default_order": "Big"}`. Missing keys keep defaults.
    pub fn from_json(text: &str) -> Result<Self, CodecError> {
        serde_json::from_str(text).map_err(|e| CodecError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_host_order() {
        assert_eq!(CodecConfig::default().default_order, ByteOrder::host());
    }

    #[test]
    fn json_overrides_order() {
        let cfg = CodecConfig::from_json(r#"{"default_order":"Big"}"#).unwrap();
        assert_eq!(cfg.default_order, ByteOrder::Big);
        let cfg = CodecConfig::from_json("{}").unwrap();
        assert_eq!(cfg, CodecConfig::host());
    }
}
