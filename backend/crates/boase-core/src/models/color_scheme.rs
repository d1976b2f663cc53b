use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Utility-class color tokens used to render a team card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub bg_color: String,
    pub text_color: String,
    pub border_color: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            bg_color: "bg-gray-700".to_string(),
            text_color: "text-gray-100".to_string(),
            border_color: "border-gray-500".to_string(),
        }
    }
}

impl ColorScheme {
    /// Decode a color scheme stored as JSON, either as an object or as a
    /// string holding the JSON text. Anything malformed decodes to `None`.
    pub fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) => serde_json::from_value(value.clone()).ok(),
            Value::String(text) => serde_json::from_str(text).ok(),
            _ => None,
        }
    }

    /// Serde helper for the `color_scheme` column.
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(Self::from_json_value))
    }
}
