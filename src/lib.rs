pub mod assets;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod template;

use std::sync::{Arc, RwLock};

pub use routes::AppState;

use diabetcare_community::Board;
use diabetcare_mealplan::PlanBook;
use diabetcare_recipe::Catalog;

/// Build the application router.
///
/// Runs the template/catalog integrity validation before anything is served;
/// a template referencing an unknown recipe id is a fatal startup fault, not
/// a request-time surprise. Also used by integration tests to get a router
/// without binding a listener.
pub fn create_app(config: config::Config) -> anyhow::Result<axum::Router> {
    let catalog = Arc::new(Catalog::builtin());
    let plan_book = Arc::new(PlanBook::builtin());
    plan_book.validate(&catalog)?;

    let board = if config.community.seed_demo_posts {
        Board::seeded()
    } else {
        Board::new()
    };

    let state = AppState {
        config,
        catalog,
        plan_book,
        board: Arc::new(RwLock::new(board)),
    };

    Ok(routes::router(state))
}
