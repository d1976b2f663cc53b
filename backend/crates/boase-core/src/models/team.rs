use crate::ColorScheme;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A team users can belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default, deserialize_with = "ColorScheme::deserialize_lenient")]
    pub color_scheme: Option<ColorScheme>,
}

impl Team {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: None,
            icon_name: None,
            color_scheme: None,
        }
    }

    /// Path segment used to link to the team: the slug, else the id.
    pub fn route_key(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => self.id.to_string(),
        }
    }

    pub fn color_scheme_or_default(&self) -> ColorScheme {
        self.color_scheme.clone().unwrap_or_default()
    }
}
