pub mod health;
pub mod production;
pub mod projects;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /site                        whole home page (?billing=monthly|yearly)
/// /site/about                  about section
/// /site/pricing                pricing section (?billing=monthly|yearly)
/// /site/footer                 footer
///
/// /projects                    project cards
/// /projects/{id}               project modal with phases and steps
///
/// /production/hub              task buckets and stats
/// /production/overview         per-project progress cards
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/site", site::router())
        .nest("/projects", projects::router())
        .nest("/production", production::router())
}
