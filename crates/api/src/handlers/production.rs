//! Handlers for the production tracking views.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use lumen_core::progress::overview_cards;
use lumen_core::tasks::build_hub;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /production/hub
///
/// Overdue flags are evaluated against the server clock at request time.
pub async fn get_hub(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let source = state.source.as_ref();
    let (projects, phases, tasks, cast, crew) = tokio::try_join!(
        source.get_projects(),
        source.get_all_production_phases(),
        source.get_production_tasks(),
        source.get_cast(),
        source.get_crew(),
    )?;

    let hub = build_hub(&projects, &phases, &tasks, &cast, &crew, Utc::now());
    tracing::debug!(
        tasks = hub.stats.total_tasks,
        overdue = hub.stats.overdue_tasks,
        "Production hub built"
    );

    Ok(Json(DataResponse { data: hub }))
}

/// GET /production/overview
pub async fn get_overview(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let (projects, phases) = tokio::try_join!(
        state.source.get_projects(),
        state.source.get_all_production_phases(),
    )?;

    Ok(Json(DataResponse {
        data: overview_cards(&projects, &phases),
    }))
}
