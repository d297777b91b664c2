//! Route definitions for production tracking.

use axum::routing::get;
use axum::Router;

use crate::handlers::production;
use crate::state::AppState;

/// Routes mounted at `/production`.
///
/// ```text
/// GET  /hub        -> get_hub
/// GET  /overview   -> get_overview
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hub", get(production::get_hub))
        .route("/overview", get(production::get_overview))
}
