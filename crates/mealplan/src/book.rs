use diabetcare_recipe::{Catalog, RecipeId};
use diabetcare_shared::MealSlot;
use strum::VariantArray;

use crate::{MealPlanError, TemplateKey};

/// Candidate recipe ids for each meal slot of one template.
#[derive(Debug, Clone)]
pub struct PlanTemplate {
    pub breakfast: Vec<RecipeId>,
    pub lunch: Vec<RecipeId>,
    pub dinner: Vec<RecipeId>,
}

impl PlanTemplate {
    pub fn candidates(&self, slot: MealSlot) -> &[RecipeId] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

/// The fixed table of meal-plan templates.
pub struct PlanBook {
    type1_low_carb: PlanTemplate,
    gestational_moderate: PlanTemplate,
    type2_balanced: PlanTemplate,
}

impl PlanBook {
    /// The compiled-in template table. Candidate ids refer to
    /// [`Catalog::builtin`](diabetcare_recipe::Catalog::builtin).
    pub fn builtin() -> Self {
        Self {
            type1_low_carb: PlanTemplate {
                breakfast: vec![2, 4],
                lunch: vec![5, 7],
                dinner: vec![10, 11],
            },
            gestational_moderate: PlanTemplate {
                breakfast: vec![1, 3],
                lunch: vec![6, 8],
                dinner: vec![9, 12],
            },
            type2_balanced: PlanTemplate {
                breakfast: vec![1, 2, 3, 4],
                lunch: vec![5, 6, 8],
                dinner: vec![9, 11, 12],
            },
        }
    }

    pub fn template(&self, key: TemplateKey) -> &PlanTemplate {
        match key {
            TemplateKey::Type1LowCarb => &self.type1_low_carb,
            TemplateKey::GestationalModerate => &self.gestational_moderate,
            TemplateKey::Type2Balanced => &self.type2_balanced,
        }
    }

    /// Startup integrity check: every candidate set is non-empty and every
    /// referenced id exists in `catalog`. A failure here is fatal; deferring
    /// it to request time would surface as a missing meal on the results
    /// screen.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), MealPlanError> {
        for &key in TemplateKey::VARIANTS {
            let template = self.template(key);
            for &slot in MealSlot::VARIANTS {
                let candidates = template.candidates(slot);
                if candidates.is_empty() {
                    return Err(MealPlanError::EmptyCandidateSet { template: key, slot });
                }
                for &id in candidates {
                    if !catalog.contains(id) {
                        return Err(MealPlanError::UnknownRecipe { template: key, slot, id });
                    }
                }
            }
        }
        Ok(())
    }
}
