//! The application's route table
//!
//! Declared once and shared read-only for the life of the process.

use once_cell::sync::OnceCell;

use crate::{Page, Route, RouteError, Router};

static APP_ROUTER: OnceCell<Router> = OnceCell::new();

/// Route declarations in match order
pub fn app_routes() -> Result<Vec<Route>, RouteError> {
    Ok(vec![
        Route::new("/", Page::SessionCreate)?,
        Route::new("/s/:id/:token", Page::Session)?.with_name("session"),
        Route::new("/s/:id/:token/edit", Page::MemberEdit)?.with_name("member-edit"),
        Route::new("/s/:id/:token/expense/:expId/edit", Page::ExpenseEdit)?
            .with_name("expense-edit"),
    ])
}

/// Builds a fresh router over the application routes
pub fn build_app_router(case_insensitive: bool) -> Result<Router, RouteError> {
    Router::new()
        .with_case_sensitivity(case_insensitive)
        .with_routes(app_routes()?)
}

/// Process-wide case-sensitive application router, built on first use
pub fn app_router() -> Result<&'static Router, RouteError> {
    APP_ROUTER.get_or_try_init(|| build_app_router(false))
}
