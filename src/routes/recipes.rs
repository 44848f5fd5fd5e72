use axum::extract::State;
use axum::response::IntoResponse;

use diabetcare_recipe::Recipe;

use crate::routes::AppState;
use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "recipes.html")]
pub struct RecipesTemplate {
    pub current_path: String,
    pub recipes: Vec<Recipe>,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(RecipesTemplate {
        current_path: "recipes".to_owned(),
        recipes: app.catalog.iter().cloned().collect(),
    })
}
