use std::str::FromStr;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use strum::VariantArray;

use diabetcare_mealplan::{DailyTotals, TemplateKey, generate};
use diabetcare_recipe::Recipe;
use diabetcare_shared::{DiabetesType, DietaryPreference, MealSlot};

use crate::error::AppError;
use crate::routes::AppState;
use crate::template::Template;

pub struct SelectOption {
    pub value: String,
    pub label: &'static str,
}

pub struct MealView {
    pub slot: &'static str,
    pub recipe: Recipe,
}

pub struct PlanView {
    pub template: String,
    pub meals: Vec<MealView>,
    pub totals: DailyTotals,
}

#[derive(Default)]
pub struct FormView {
    pub age: String,
    pub diabetes_type: String,
    pub dietary_preference: String,
}

#[derive(askama::Template)]
#[template(path = "meal-planner.html")]
pub struct MealPlannerTemplate {
    pub current_path: String,
    pub diabetes_types: Vec<SelectOption>,
    pub preferences: Vec<SelectOption>,
    pub form: FormView,
    pub error: Option<String>,
    pub plan: Option<PlanView>,
}

impl Default for MealPlannerTemplate {
    fn default() -> Self {
        Self {
            current_path: "meal-planner".to_owned(),
            diabetes_types: DiabetesType::VARIANTS
                .iter()
                .map(|t| SelectOption {
                    value: t.to_string(),
                    label: t.label(),
                })
                .collect(),
            preferences: DietaryPreference::VARIANTS
                .iter()
                .map(|p| SelectOption {
                    value: p.to_string(),
                    label: p.label(),
                })
                .collect(),
            form: FormView::default(),
            error: None,
            plan: None,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(MealPlannerTemplate::default())
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub diabetes_type: String,
    #[serde(default)]
    pub dietary_preference: String,
}

/// Profile parsed from the generate form. Age is collected and validated but
/// never influences template selection.
struct Profile {
    diabetes_type: DiabetesType,
    dietary_preference: DietaryPreference,
}

fn parse_profile(input: &ActionInput) -> Result<Profile, String> {
    if input.age.trim().is_empty()
        || input.diabetes_type.is_empty()
        || input.dietary_preference.is_empty()
    {
        return Err("Please fill in your age, diabetes type and dietary preference.".to_owned());
    }

    if input.age.trim().parse::<u32>().is_err() {
        return Err("Age must be a number.".to_owned());
    }

    let diabetes_type = DiabetesType::from_str(&input.diabetes_type)
        .map_err(|_| "Please select a valid diabetes type.".to_owned())?;
    let dietary_preference = DietaryPreference::from_str(&input.dietary_preference)
        .map_err(|_| "Please select a valid dietary preference.".to_owned())?;

    Ok(Profile {
        diabetes_type,
        dietary_preference,
    })
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> Result<Response, AppError> {
    let profile = match parse_profile(&input) {
        Ok(profile) => profile,
        Err(message) => {
            let mut response = template.render(MealPlannerTemplate {
                form: FormView {
                    age: input.age,
                    diabetes_type: input.diabetes_type,
                    dietary_preference: input.dietary_preference,
                },
                error: Some(message),
                ..Default::default()
            });
            *response.status_mut() = StatusCode::UNPROCESSABLE_ENTITY;
            return Ok(response);
        }
    };

    let key = TemplateKey::for_profile(profile.diabetes_type, profile.dietary_preference);
    tracing::debug!(template = %key, "generating meal plan");

    let plan = generate(&app.plan_book, &app.catalog, key, &mut rand::rng())?;
    let totals = plan.totals();

    let meals = MealSlot::VARIANTS
        .iter()
        .map(|&slot| MealView {
            slot: slot.label(),
            recipe: plan.slot(slot).clone(),
        })
        .collect();

    Ok(template.render(MealPlannerTemplate {
        form: FormView {
            age: input.age,
            diabetes_type: input.diabetes_type,
            dietary_preference: input.dietary_preference,
        },
        plan: Some(PlanView {
            template: key.to_string(),
            meals,
            totals,
        }),
        ..Default::default()
    }))
}
