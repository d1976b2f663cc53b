use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

/// Insert payload for a user-created team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTeam {
    pub name: String,
    pub slug: String,
}

impl NewTeam {
    /// Build a team from user input, deriving the slug from the name.
    #[track_caller]
    pub fn from_name(name: &str) -> CoreErrorResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("Please enter a team name."));
        }

        let slug = slugify(name);
        if slug.is_empty() {
            return Err(CoreError::validation(
                "Team name must contain at least one letter or digit.",
            ));
        }

        Ok(Self {
            name: name.to_string(),
            slug,
        })
    }
}

/// Lowercase, collapse whitespace runs to `-`, drop anything outside `[a-z0-9-]`.
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }

    slug
}
