//! Domain enumerations shared across the diabetcare crates.
//!
//! Form values arrive as kebab-case strings ("type1", "low-carb"), so every
//! enum derives strum's `Display`/`EnumString` with matching serialization.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

/// One of the three meals of a daily plan. Also used as the recipe category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantArray, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantArray, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DiabetesType {
    Type1,
    Type2,
    Gestational,
    Prediabetes,
}

impl DiabetesType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Type1 => "Type 1 Diabetes",
            Self::Type2 => "Type 2 Diabetes",
            Self::Gestational => "Gestational Diabetes",
            Self::Prediabetes => "Prediabetes",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantArray, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DietaryPreference {
    Balanced,
    LowCarb,
    Mediterranean,
    Vegetarian,
    LowSodium,
}

impl DietaryPreference {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Balanced => "Balanced Diet",
            Self::LowCarb => "Low Carb",
            Self::Mediterranean => "Mediterranean",
            Self::Vegetarian => "Vegetarian",
            Self::LowSodium => "Low Sodium",
        }
    }
}

/// Category attached to a community post.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantArray, Serialize, Deserialize,
)]
pub enum PostCategory {
    #[strum(serialize = "General")]
    General,
    #[strum(serialize = "Success Story")]
    SuccessStory,
    #[strum(serialize = "Question")]
    Question,
    #[strum(serialize = "Recipe Share")]
    RecipeShare,
    #[strum(serialize = "Motivation")]
    Motivation,
}

impl Default for PostCategory {
    fn default() -> Self {
        Self::General
    }
}
