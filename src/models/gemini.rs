//! Gemini model definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::EnumString;

/// Gemini models known to this crate.
///
/// Unknown identifiers parse into [`GeminiModel::Custom`] so newer models can
/// be used without a crate update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Default)]
pub enum GeminiModel {
    #[strum(serialize = "gemini-3-pro-preview")]
    Gemini3ProPreview,
    #[strum(serialize = "gemini-3-flash-preview")]
    Gemini3FlashPreview,
    #[strum(serialize = "gemini-2.5-pro")]
    Gemini25Pro,
    #[strum(serialize = "gemini-2.5-flash")]
    Gemini25Flash,
    #[default]
    #[strum(serialize = "gemini-2.5-flash-lite")]
    Gemini25FlashLite,
    #[strum(serialize = "gemini-2.0-flash")]
    Gemini20Flash,
    /// Custom/unknown Gemini model.
    #[strum(default)]
    Custom(String),
}

impl GeminiModel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gemini3ProPreview => "gemini-3-pro-preview",
            Self::Gemini3FlashPreview => "gemini-3-flash-preview",
            Self::Gemini25Pro => "gemini-2.5-pro",
            Self::Gemini25Flash => "gemini-2.5-flash",
            Self::Gemini25FlashLite => "gemini-2.5-flash-lite",
            Self::Gemini20Flash => "gemini-2.0-flash",
            Self::Custom(s) => s,
        }
    }

    /// Whether requests for this model may carry a thinking level.
    pub fn supports_reasoning_control(&self) -> bool {
        super::capabilities::supports_reasoning_control(self)
    }

    /// Parse a model id, falling back to [`GeminiModel::Custom`].
    pub fn parse(id: &str) -> Self {
        Self::from_str(id.trim()).unwrap_or_else(|_| Self::Custom(id.trim().to_string()))
    }
}

impl fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GeminiModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GeminiModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_round_trip_through_parse() {
        for model in [
            GeminiModel::Gemini3ProPreview,
            GeminiModel::Gemini3FlashPreview,
            GeminiModel::Gemini25Pro,
            GeminiModel::Gemini25Flash,
            GeminiModel::Gemini25FlashLite,
            GeminiModel::Gemini20Flash,
        ] {
            assert_eq!(GeminiModel::parse(model.as_str()), model);
        }
    }

    #[test]
    fn unknown_id_becomes_custom() {
        let model = GeminiModel::parse("gemini-9-ultra");
        assert_eq!(model, GeminiModel::Custom("gemini-9-ultra".into()));
        assert_eq!(model.to_string(), "gemini-9-ultra");
    }

    #[test]
    fn default_model_is_flash_lite() {
        assert_eq!(GeminiModel::default().as_str(), "gemini-2.5-flash-lite");
    }

    #[test]
    fn serializes_as_plain_id() {
        let json = serde_json::to_string(&GeminiModel::Gemini25Pro).unwrap();
        assert_eq!(json, "\"gemini-2.5-pro\"");
        let back: GeminiModel = serde_json::from_str("\"gemini-3-flash-preview\"").unwrap();
        assert_eq!(back, GeminiModel::Gemini3FlashPreview);
    }
}
