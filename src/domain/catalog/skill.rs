//! Skill record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One sortable item. The name is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    name: String,
    #[serde(default)]
    emoji: String,
    #[serde(default)]
    description: String,
}

impl Skill {
    pub fn new(
        name: impl Into<String>,
        emoji: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display glyph; carries no meaning.
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emoji.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.emoji, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_emoji_when_present() {
        assert_eq!(Skill::new("Maker", "🔨", "").to_string(), "🔨 Maker");
        assert_eq!(Skill::new("Maker", "", "").to_string(), "Maker");
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let skill: Skill = serde_json::from_str(r#"{"name":"Teacher"}"#).unwrap();
        assert_eq!(skill.name(), "Teacher");
        assert_eq!(skill.emoji(), "");
        assert_eq!(skill.description(), "");
    }
}
