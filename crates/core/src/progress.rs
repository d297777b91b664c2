//! Completion aggregation for production phases and projects.
//!
//! Everything here is pure: callers pass the collections they already
//! fetched and get display-ready numbers back. Missing data degrades to
//! zero percent and default labels; nothing in this module can fail.

use serde::Serialize;

use crate::models::{PhaseStep, ProductionPhase, Project, WorkStatus};
use crate::types::{DocId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Current-phase label for a project with no phases yet.
pub const LABEL_PLANNING: &str = "Planning";

/// Current-phase label once every phase is completed.
pub const LABEL_FINISHING_UP: &str = "Finishing Up";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Step completion for a single phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

impl PhaseProgress {
    /// Short "2/5 steps" label, omitted when the phase has no steps.
    pub fn label(&self) -> Option<String> {
        (self.total > 0).then(|| format!("{}/{} steps", self.completed, self.total))
    }
}

/// Phase completion for a whole project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectProgress {
    pub completed_phases: usize,
    pub total_phases: usize,
    pub percent: u8,
    pub current_phase: String,
}

/// A phase with its steps attached, as assembled by the project modal's
/// two-stage fetch.
#[derive(Debug, Clone)]
pub struct PhaseWithSteps {
    pub phase: ProductionPhase,
    pub steps: Vec<PhaseStep>,
}

/// Display form of one phase in the project modal.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseView {
    pub id: DocId,
    pub phase_name: String,
    pub status: WorkStatus,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub progress: PhaseProgress,
    pub progress_label: Option<String>,
    pub steps: Vec<StepView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub id: DocId,
    pub step_name: String,
    pub status: WorkStatus,
    pub description: Option<String>,
}

/// One card on the production overview.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewCard {
    pub project_id: DocId,
    pub title: String,
    pub poster_url: Option<String>,
    pub progress: ProjectProgress,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// `round(100 * completed / total)` with halves rounding up, `0` when
/// `total` is zero.
pub fn rounded_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    ((200 * completed + total) / (2 * total)) as u8
}

/// Step completion for one phase.
pub fn phase_progress(steps: &[PhaseStep]) -> PhaseProgress {
    let total = steps.len();
    let completed = steps.iter().filter(|s| s.status.is_completed()).count();
    PhaseProgress {
        completed,
        total,
        percent: rounded_percent(completed, total),
    }
}

/// Phase completion and current-phase label for one project's phases.
///
/// The current phase is the first non-completed phase in collection order.
pub fn project_progress<'a, I>(phases: I) -> ProjectProgress
where
    I: IntoIterator<Item = &'a ProductionPhase>,
{
    let mut total = 0;
    let mut completed = 0;
    let mut current: Option<&str> = None;

    for phase in phases {
        total += 1;
        if phase.status.is_completed() {
            completed += 1;
        } else if current.is_none() {
            current = Some(phase.phase_name.as_str());
        }
    }

    let current_phase = match (total, current) {
        (0, _) => LABEL_PLANNING,
        (_, Some(name)) => name,
        (_, None) => LABEL_FINISHING_UP,
    };

    ProjectProgress {
        completed_phases: completed,
        total_phases: total,
        percent: rounded_percent(completed, total),
        current_phase: current_phase.to_string(),
    }
}

/// [`project_progress`] over the phases of `project_id` taken from a
/// collection spanning every project.
pub fn project_progress_for(project_id: &str, all_phases: &[ProductionPhase]) -> ProjectProgress {
    project_progress(all_phases.iter().filter(|p| p.project_id == project_id))
}

/// One overview card per project, in project collection order.
pub fn overview_cards(projects: &[Project], all_phases: &[ProductionPhase]) -> Vec<OverviewCard> {
    projects
        .iter()
        .map(|project| OverviewCard {
            project_id: project.id.clone(),
            title: project.title.clone(),
            poster_url: project.poster_url.clone(),
            progress: project_progress_for(&project.id, all_phases),
        })
        .collect()
}

/// Build the modal's phase list, computing each phase's step progress.
pub fn phase_views(phases: &[PhaseWithSteps]) -> Vec<PhaseView> {
    phases
        .iter()
        .map(|entry| {
            let progress = phase_progress(&entry.steps);
            PhaseView {
                id: entry.phase.id.clone(),
                phase_name: entry.phase.phase_name.clone(),
                status: entry.phase.status,
                start_date: entry.phase.start_date,
                end_date: entry.phase.end_date,
                progress,
                progress_label: progress.label(),
                steps: entry
                    .steps
                    .iter()
                    .map(|s| StepView {
                        id: s.id.clone(),
                        step_name: s.step_name.clone(),
                        status: s.status,
                        description: s.description.clone(),
                    })
                    .collect(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
