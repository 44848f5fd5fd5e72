use std::sync::{Arc, RwLock};

use axum::{Router, response::IntoResponse, routing::get, routing::post};

use diabetcare_community::Board;
use diabetcare_mealplan::PlanBook;
use diabetcare_recipe::Catalog;

use crate::template::{NotFoundTemplate, Template};

mod community;
mod education;
mod health;
mod index;
mod meal_planner;
mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub catalog: Arc<Catalog>,
    pub plan_book: Arc<PlanBook>,
    pub board: Arc<RwLock<Board>>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render(NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/recipes", get(recipes::page))
        .route(
            "/meal-planner",
            get(meal_planner::page).post(meal_planner::action),
        )
        .route("/education", get(education::page))
        .route("/community", get(community::page).post(community::action))
        .route("/community/like/{id}", post(community::like))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
