use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category given to skills that users type in themselves.
pub const USER_DEFINED_CATEGORY: &str = "User-defined";

/// Entry in the global skill catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Skill {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            description: None,
        }
    }

    /// Case- and whitespace-insensitive name comparison.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}
