//! Fetch orchestration between handlers and the content source.
//!
//! - [`load_site_content`] reads every home-page collection concurrently
//!   and fails as a whole if any read fails.
//! - [`load_project_phases`] performs the project modal's two-stage fetch
//!   (phases, then every phase's steps in parallel) under a
//!   [`CancellationToken`], degrading to an empty list on failure.

use std::sync::Arc;

use lumen_baas::{BaasError, ContentSource};
use lumen_core::models::{
    AboutContent, ContactInfo, Department, DepartmentCrew, DepartmentRole, Person, PhaseStep,
    PricingTier, Project, SiteSettings,
};
use lumen_core::pricing::{pricing_section, BillingCycle};
use lumen_core::progress::PhaseWithSteps;
use lumen_core::site::{self, AboutInputs, HomePage};
use tokio_util::sync::CancellationToken;

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

/// Every collection the home page is built from.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub about: Option<AboutContent>,
    pub projects: Vec<Project>,
    pub cast: Vec<Person>,
    pub crew: Vec<Person>,
    pub department_roles: Vec<DepartmentRole>,
    pub department_crew: Vec<DepartmentCrew>,
    pub departments: Vec<Department>,
    pub contact: Option<ContactInfo>,
    pub pricing_tiers: Vec<PricingTier>,
    pub settings: Option<SiteSettings>,
}

impl SiteContent {
    pub fn about_inputs(&self) -> AboutInputs<'_> {
        AboutInputs {
            content: self.about.as_ref(),
            departments: &self.departments,
            roles: &self.department_roles,
            department_crew: &self.department_crew,
            crew: &self.crew,
            contact: self.contact.as_ref(),
        }
    }

    /// Build the whole page. A missing settings document renders with
    /// empty defaults.
    pub fn home_page(&self, billing: BillingCycle) -> HomePage {
        let settings = self.settings.clone().unwrap_or_default();
        HomePage {
            hero: site::hero(&settings),
            about: site::about_section(self.about_inputs()),
            projects: site::project_cards(&self.projects),
            pricing: pricing_section(&self.pricing_tiers, billing),
            footer: site::footer(&settings, self.contact.as_ref()),
        }
    }
}

/// Read every home-page collection concurrently.
///
/// All reads must succeed; the first failure is returned and no partial
/// content is produced.
pub async fn load_site_content(source: &dyn ContentSource) -> Result<SiteContent, BaasError> {
    let (
        about,
        projects,
        cast,
        crew,
        department_roles,
        department_crew,
        departments,
        contact,
        pricing_tiers,
        settings,
    ) = tokio::try_join!(
        source.get_about_content(),
        source.get_projects(),
        source.get_cast(),
        source.get_crew(),
        source.get_all_department_roles(),
        source.get_all_department_crew(),
        source.get_departments(),
        source.get_static_contact_info(),
        source.get_pricing_tiers(),
        source.get_site_settings(),
    )?;

    tracing::debug!(
        projects = projects.len(),
        tiers = pricing_tiers.len(),
        departments = departments.len(),
        "Site content loaded"
    );

    Ok(SiteContent {
        about,
        projects,
        cast,
        crew,
        department_roles,
        department_crew,
        departments,
        contact,
        pricing_tiers,
        settings,
    })
}

// ---------------------------------------------------------------------------
// Project phases
// ---------------------------------------------------------------------------

/// Why the phase fetch produced nothing.
#[derive(Debug, thiserror::Error)]
pub enum PhaseFetchError {
    #[error(transparent)]
    Source(#[from] BaasError),

    #[error("Phase fetch cancelled")]
    Cancelled,

    #[error("Step fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Fetch a project's phases, then all of their steps concurrently, and
/// attach each step list to its phase.
///
/// Step fetches run as spawned tasks observing `cancel`. When any step
/// fetch fails the remaining ones are cancelled.
pub async fn fetch_phases_with_steps(
    source: Arc<dyn ContentSource>,
    project_id: &str,
    cancel: &CancellationToken,
) -> Result<Vec<PhaseWithSteps>, PhaseFetchError> {
    let phases = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(PhaseFetchError::Cancelled),
        result = source.get_production_phases_for_project(project_id) => result?,
    };

    let fan_out = cancel.child_token();
    let handles: Vec<_> = phases
        .iter()
        .map(|phase| {
            let source = Arc::clone(&source);
            let cancel = fan_out.clone();
            let phase_id = phase.id.clone();
            tokio::spawn(async move {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Err(PhaseFetchError::Cancelled),
                    result = source.get_phase_steps_for_phase(&phase_id) => {
                        result.map_err(PhaseFetchError::from)
                    }
                }
            })
        })
        .collect();

    let joined = futures::future::try_join_all(handles.into_iter().map(|handle| async move {
        handle.await.map_err(PhaseFetchError::from).and_then(|result| result)
    }))
    .await;

    let steps: Vec<Vec<PhaseStep>> = match joined {
        Ok(steps) => steps,
        Err(e) => {
            // Detached step tasks outlive their dropped handles.
            fan_out.cancel();
            return Err(e);
        }
    };

    Ok(phases
        .into_iter()
        .zip(steps)
        .map(|(phase, steps)| PhaseWithSteps { phase, steps })
        .collect())
}

/// [`fetch_phases_with_steps`] with failures logged and degraded to an
/// empty list, so the rest of the project modal still renders.
pub async fn load_project_phases(
    source: Arc<dyn ContentSource>,
    project_id: &str,
    cancel: &CancellationToken,
) -> Vec<PhaseWithSteps> {
    match fetch_phases_with_steps(source, project_id, cancel).await {
        Ok(phases) => {
            tracing::debug!(project_id, phase_count = phases.len(), "Project phases loaded");
            phases
        }
        Err(PhaseFetchError::Cancelled) => {
            tracing::debug!(project_id, "Project phase fetch cancelled");
            Vec::new()
        }
        Err(e) => {
            tracing::error!(project_id, error = %e, "Failed to load project phases");
            Vec::new()
        }
    }
}
