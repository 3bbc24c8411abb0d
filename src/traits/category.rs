//! Personality trait categories

use serde::{Deserialize, Serialize};

/// Fixed categories a personality trait can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Cognitive,
    Emotional,
    #[default]
    Behavioral,
    Social,
    Moral,
    Dark,
    Motivational,
    Existential,
    Leadership,
    Affective,
}

impl TraitCategory {
    pub fn name(&self) -> &'static str {
        match self {
            TraitCategory::Cognitive => "Cognitive",
            TraitCategory::Emotional => "Emotional",
            TraitCategory::Behavioral => "Behavioral",
            TraitCategory::Social => "Social",
            TraitCategory::Moral => "Moral/Ethical",
            TraitCategory::Dark => "Dark Traits",
            TraitCategory::Motivational => "Motivational",
            TraitCategory::Existential => "Existential",
            TraitCategory::Leadership => "Leadership",
            TraitCategory::Affective => "Affective",
        }
    }

    /// Accent color as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            TraitCategory::Cognitive => "#3b82f6",
            TraitCategory::Emotional => "#f59e0b",
            TraitCategory::Behavioral => "#10b981",
            TraitCategory::Social => "#ec4899",
            TraitCategory::Moral => "#6366f1",
            TraitCategory::Dark => "#6b7280",
            TraitCategory::Motivational => "#06b6d4",
            TraitCategory::Existential => "#8b5cf6",
            TraitCategory::Leadership => "#059669",
            TraitCategory::Affective => "#dc2626",
        }
    }

    /// All categories, in display order
    pub fn all() -> &'static [TraitCategory] {
        &[
            TraitCategory::Cognitive,
            TraitCategory::Emotional,
            TraitCategory::Behavioral,
            TraitCategory::Social,
            TraitCategory::Moral,
            TraitCategory::Dark,
            TraitCategory::Motivational,
            TraitCategory::Existential,
            TraitCategory::Leadership,
            TraitCategory::Affective,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category() {
        assert_eq!(TraitCategory::default(), TraitCategory::Behavioral);
    }

    #[test]
    fn test_all_categories_have_names() {
        assert_eq!(TraitCategory::all().len(), 10);
        for category in TraitCategory::all() {
            assert!(!category.name().is_empty());
            assert!(category.color().starts_with('#'));
        }
    }
}
