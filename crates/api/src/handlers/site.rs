//! Handlers for the public marketing page.
//!
//! `GET /site` returns the whole page in one document. The section
//! endpoints return one part each, fetching only the collections that
//! section needs.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use lumen_core::pricing::pricing_section;
use lumen_core::site::{self, AboutInputs};

use crate::error::AppResult;
use crate::loader::load_site_content;
use crate::query::BillingParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /site
pub async fn get_site(
    State(state): State<AppState>,
    Query(params): Query<BillingParams>,
) -> AppResult<impl IntoResponse> {
    let content = load_site_content(state.source.as_ref()).await?;
    Ok(Json(DataResponse {
        data: content.home_page(params.billing),
    }))
}

/// GET /site/about
pub async fn get_about(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let source = state.source.as_ref();
    let (about, departments, roles, department_crew, crew, contact) = tokio::try_join!(
        source.get_about_content(),
        source.get_departments(),
        source.get_all_department_roles(),
        source.get_all_department_crew(),
        source.get_crew(),
        source.get_static_contact_info(),
    )?;

    let section = site::about_section(AboutInputs {
        content: about.as_ref(),
        departments: &departments,
        roles: &roles,
        department_crew: &department_crew,
        crew: &crew,
        contact: contact.as_ref(),
    });

    Ok(Json(DataResponse { data: section }))
}

/// GET /site/pricing
///
/// `data` is `null` when no tiers are configured.
pub async fn get_pricing(
    State(state): State<AppState>,
    Query(params): Query<BillingParams>,
) -> AppResult<impl IntoResponse> {
    let tiers = state.source.get_pricing_tiers().await?;
    Ok(Json(DataResponse {
        data: pricing_section(&tiers, params.billing),
    }))
}

/// GET /site/footer
pub async fn get_footer(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let (settings, contact) = tokio::try_join!(
        state.source.get_site_settings(),
        state.source.get_static_contact_info(),
    )?;
    let settings = settings.unwrap_or_default();

    Ok(Json(DataResponse {
        data: site::footer(&settings, contact.as_ref()),
    }))
}
