//! Meal-plan templates and the plan generator.
//!
//! A [`PlanBook`] holds the fixed set of templates, each mapping a meal slot
//! to a non-empty candidate set of recipe ids. Generating a plan is a pure
//! function of the selected template, the catalog and an injected random
//! source: one independent uniform draw per slot. The random source is a
//! `rand::Rng` parameter so tests can seed it and assert deterministically.

mod book;
mod error;

pub use book::*;
pub use error::MealPlanError;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use diabetcare_recipe::{Catalog, Recipe};
use diabetcare_shared::{DiabetesType, DietaryPreference, MealSlot};

/// Key of one of the fixed meal-plan templates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantArray, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKey {
    Type1LowCarb,
    GestationalModerate,
    Type2Balanced,
}

impl TemplateKey {
    /// Fixed decision rule mapping a user profile to a template.
    ///
    /// Total over both enumerations: every combination resolves to exactly
    /// one key. Age is collected by the form but never affects the choice.
    /// Preferences such as mediterranean or low-sodium fold into the balanced
    /// default, mirroring the original product behaviour.
    pub fn for_profile(diabetes_type: DiabetesType, preference: DietaryPreference) -> Self {
        match (diabetes_type, preference) {
            (DiabetesType::Type1, DietaryPreference::LowCarb) => Self::Type1LowCarb,
            (DiabetesType::Gestational, _) => Self::GestationalModerate,
            _ => Self::Type2Balanced,
        }
    }
}

/// A transient generated plan: one chosen recipe per slot.
///
/// Recipes are cloned out of the catalog so the plan owns its data; it is
/// never stored and never mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPlan {
    pub template: TemplateKey,
    pub breakfast: Recipe,
    pub lunch: Recipe,
    pub dinner: Recipe,
}

/// Exact sums of the three chosen recipes' nutrition facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTotals {
    pub calories: u32,
    pub carbs: u32,
    pub sugar: u32,
}

impl GeneratedPlan {
    pub fn slot(&self, slot: MealSlot) -> &Recipe {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn totals(&self) -> DailyTotals {
        let meals = [&self.breakfast, &self.lunch, &self.dinner];
        DailyTotals {
            calories: meals.iter().map(|r| r.calories).sum(),
            carbs: meals.iter().map(|r| r.carbs).sum(),
            sugar: meals.iter().map(|r| r.sugar).sum(),
        }
    }
}

/// Draw one recipe per slot from `key`'s template.
///
/// A candidate id missing from the catalog means the compiled-in data is
/// inconsistent; that is reported as an error instead of silently dropping
/// the slot. [`PlanBook::validate`] catches the same fault at startup, so a
/// validated book cannot fail here.
pub fn generate<R: Rng + ?Sized>(
    book: &PlanBook,
    catalog: &Catalog,
    key: TemplateKey,
    rng: &mut R,
) -> Result<GeneratedPlan, MealPlanError> {
    let template = book.template(key);

    let mut pick = |slot: MealSlot| -> Result<Recipe, MealPlanError> {
        let candidates = template.candidates(slot);
        let id = *candidates
            .choose(rng)
            .ok_or(MealPlanError::EmptyCandidateSet { template: key, slot })?;

        catalog
            .get(id)
            .cloned()
            .ok_or(MealPlanError::UnknownRecipe { template: key, slot, id })
    };

    Ok(GeneratedPlan {
        template: key,
        breakfast: pick(MealSlot::Breakfast)?,
        lunch: pick(MealSlot::Lunch)?,
        dinner: pick(MealSlot::Dinner)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::VariantArray;

    #[test]
    fn decision_rule_is_total_and_deterministic() {
        for &diabetes_type in DiabetesType::VARIANTS {
            for &preference in DietaryPreference::VARIANTS {
                let first = TemplateKey::for_profile(diabetes_type, preference);
                let second = TemplateKey::for_profile(diabetes_type, preference);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn special_cases_map_to_their_templates() {
        assert_eq!(
            TemplateKey::for_profile(DiabetesType::Type1, DietaryPreference::LowCarb),
            TemplateKey::Type1LowCarb
        );
        for &preference in DietaryPreference::VARIANTS {
            assert_eq!(
                TemplateKey::for_profile(DiabetesType::Gestational, preference),
                TemplateKey::GestationalModerate
            );
        }
        assert_eq!(
            TemplateKey::for_profile(DiabetesType::Type2, DietaryPreference::Balanced),
            TemplateKey::Type2Balanced
        );
        // Type 1 with anything other than low-carb falls back to the default.
        assert_eq!(
            TemplateKey::for_profile(DiabetesType::Type1, DietaryPreference::Mediterranean),
            TemplateKey::Type2Balanced
        );
        assert_eq!(
            TemplateKey::for_profile(DiabetesType::Prediabetes, DietaryPreference::LowCarb),
            TemplateKey::Type2Balanced
        );
    }

    #[test]
    fn template_keys_render_kebab_case() {
        assert_eq!(TemplateKey::Type1LowCarb.to_string(), "type1-low-carb");
        assert_eq!(
            TemplateKey::GestationalModerate.to_string(),
            "gestational-moderate"
        );
        assert_eq!(TemplateKey::Type2Balanced.to_string(), "type2-balanced");
    }
}
