use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use diabetcare_community::BoardError;
use diabetcare_mealplan::MealPlanError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Community board error: {0}")]
    BoardError(#[from] BoardError),

    #[error("Meal plan error: {0}")]
    MealPlanError(#[from] MealPlanError),
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPageTemplate {
    status_code: u16,
    error_title: String,
    error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_display = self.to_string();
        let (status_code, error_title, error_message) = match self {
            AppError::BoardError(BoardError::PostNotFound(id)) => (
                StatusCode::NOT_FOUND,
                "Post Not Found".to_string(),
                format!("Community post {id} could not be found."),
            ),
            AppError::BoardError(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation Error".to_string(),
                err.to_string(),
            ),
            AppError::MealPlanError(err) => {
                // Template/catalog mismatches are caught at startup; reaching
                // this arm means the running configuration is inconsistent.
                tracing::error!("Meal plan configuration error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        let template = ErrorPageTemplate {
            status_code: status_code.as_u16(),
            error_title,
            error_message,
        };

        match template.render() {
            Ok(html) => (status_code, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {e:?}");
                (status_code, format!("An error occurred: {error_display}")).into_response()
            }
        }
    }
}
