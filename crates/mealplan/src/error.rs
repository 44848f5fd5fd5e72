use thiserror::Error;

use diabetcare_recipe::RecipeId;
use diabetcare_shared::MealSlot;

use crate::TemplateKey;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MealPlanError {
    #[error("template {template} references unknown recipe {id} in the {slot} slot")]
    UnknownRecipe {
        template: TemplateKey,
        slot: MealSlot,
        id: RecipeId,
    },

    #[error("template {template} has no candidates for the {slot} slot")]
    EmptyCandidateSet { template: TemplateKey, slot: MealSlot },
}
