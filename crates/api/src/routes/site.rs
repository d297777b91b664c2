//! Route definitions for the public marketing page.

use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Routes mounted at `/site`.
///
/// ```text
/// GET  /          -> get_site
/// GET  /about     -> get_about
/// GET  /pricing   -> get_pricing
/// GET  /footer    -> get_footer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::get_site))
        .route("/about", get(site::get_about))
        .route("/pricing", get(site::get_pricing))
        .route("/footer", get(site::get_footer))
}
