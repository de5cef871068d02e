//! Built-in catalog variants.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Skill;

static FULL: Lazy<Vec<Skill>> = Lazy::new(|| {
    vec![
        Skill::new("Connector", "🤝", "Be the bridge between people or groups."),
        Skill::new("Quick Switcher", "⚡️", "Adapt fast when things change."),
        Skill::new("Deep Diver", "🔎", "Break down complex problems logically."),
        Skill::new("Budget Boss", "💸", "Stretch money or resources wisely."),
        Skill::new("Info Sorter", "🗂️", "Group or organize people, things, or data."),
        Skill::new("Data Wrangler", "📊", "Crunch and interpret numbers."),
        Skill::new("Detail Defender", "🛡️", "Spot errors and keep things precise."),
    ]
});

static SHORT: Lazy<Vec<Skill>> = Lazy::new(|| {
    vec![
        Skill::new("Connector", "🤝", "Be the bridge between people or groups."),
        Skill::new("Deep Diver", "🔎", "Break down complex problems logically."),
        Skill::new("Tech Confident", "💻", "Use software or tools to get stuff done."),
        Skill::new("Big Picture Thinker", "🧠", "Link ideas together into one clear plan."),
        Skill::new("People First", "❤️", "Enjoy helping others and solving their problems."),
        Skill::new("Maker", "🔨", "Design or build new things."),
        Skill::new("Idea Machine", "💡", "Come up with new ideas or approaches."),
        Skill::new("Decision Maker", "🎯", "Choose paths and take responsibility."),
        Skill::new("Teacher", "📚", "Explain things clearly so others learn."),
        Skill::new("Clear Writer", "✍️", "Write things people understand."),
    ]
});

/// Which built-in skill list to sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVariant {
    #[default]
    Full,
    Short,
}

impl CatalogVariant {
    pub(super) fn skills(&self) -> Vec<Skill> {
        match self {
            CatalogVariant::Full => FULL.clone(),
            CatalogVariant::Short => SHORT.clone(),
        }
    }
}

impl fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CatalogVariant::Full => "full",
            CatalogVariant::Short => "short",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for CatalogVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(CatalogVariant::Full),
            "short" => Ok(CatalogVariant::Short),
            other => Err(format!("unknown catalog variant '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    #[test]
    fn builtin_variants_pass_catalog_validation() {
        for variant in [CatalogVariant::Full, CatalogVariant::Short] {
            assert!(Catalog::new(variant.skills()).is_ok(), "{} invalid", variant);
        }
    }

    #[test]
    fn variant_sizes() {
        assert_eq!(CatalogVariant::Full.skills().len(), 7);
        assert_eq!(CatalogVariant::Short.skills().len(), 10);
    }

    #[test]
    fn variants_share_some_names_but_not_all() {
        let short = Catalog::builtin(CatalogVariant::Short);
        assert!(short.contains("Connector"));
        assert!(short.contains("Deep Diver"));
        assert!(!short.contains("Budget Boss"));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Short".parse::<CatalogVariant>(), Ok(CatalogVariant::Short));
        assert_eq!(" full ".parse::<CatalogVariant>(), Ok(CatalogVariant::Full));
        assert!("medium".parse::<CatalogVariant>().is_err());
    }

    #[test]
    fn deserializes_from_lowercase() {
        let v: CatalogVariant = serde_json::from_str("\"short\"").unwrap();
        assert_eq!(v, CatalogVariant::Short);
    }
}
