//! Handlers for the project grid and the project modal.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use lumen_core::error::CoreError;
use lumen_core::progress::{phase_views, project_progress};
use lumen_core::site::{project_cards, project_detail};
use tokio_util::sync::CancellationToken;

use crate::error::AppResult;
use crate::loader::load_project_phases;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /projects
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = state.source.get_projects().await?;
    Ok(Json(DataResponse {
        data: project_cards(&projects),
    }))
}

/// GET /projects/{id}
///
/// The project, cast and crew reads must succeed. The phase breakdown is
/// fetched afterwards and degrades to an empty list. If the client goes
/// away mid-request the handler future is dropped, the guard cancels the
/// token, and in-flight step fetches stop.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let (projects, cast, crew) = tokio::try_join!(
        state.source.get_projects(),
        state.source.get_cast(),
        state.source.get_crew(),
    )?;

    let project = projects
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CoreError::NotFound {
            entity: "Project",
            id: id.clone(),
        })?;

    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();
    let phases = load_project_phases(Arc::clone(&state.source), &project.id, &cancel).await;

    let progress = project_progress(phases.iter().map(|p| &p.phase));
    let detail = project_detail(project, &cast, &crew, progress, phase_views(&phases));

    Ok(Json(DataResponse { data: detail }))
}
