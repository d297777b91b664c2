//! Production hub aggregation: task buckets, overdue detection and
//! dashboard stat counts.
//!
//! The clock is always passed in so results are reproducible.

use std::cmp::Ordering;

use serde::Serialize;

use crate::lookup::{NameIndex, NOT_AVAILABLE, UNASSIGNED};
use crate::models::{Person, Priority, ProductionPhase, ProductionTask, Project, WorkStatus};
use crate::types::{DocId, Timestamp};

/// Maximum number of entries in the recently-completed bucket.
pub const RECENTLY_COMPLETED_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Tasks split by status, each bucket in display order.
#[derive(Debug, Default)]
pub struct TaskBuckets<'a> {
    pub pending: Vec<&'a ProductionTask>,
    pub in_progress: Vec<&'a ProductionTask>,
    pub recently_completed: Vec<&'a ProductionTask>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubStats {
    pub total_projects: usize,
    pub active_phases: usize,
    pub total_tasks: usize,
    pub pending_tasks: usize,
    pub in_progress_tasks: usize,
    pub completed_tasks: usize,
    pub overdue_tasks: usize,
}

/// One task row with its foreign keys resolved for display.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRow {
    pub id: DocId,
    pub task_name: String,
    pub project_name: String,
    pub assignee_name: String,
    pub due_date: Option<Timestamp>,
    pub priority: Priority,
    pub status: WorkStatus,
    pub overdue: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductionHub {
    pub stats: HubStats,
    pub pending: Vec<TaskRow>,
    pub in_progress: Vec<TaskRow>,
    pub recently_completed: Vec<TaskRow>,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// A task is overdue when its due date is strictly before `now` and it is
/// not completed. Tasks without a due date are never overdue.
pub fn is_overdue(task: &ProductionTask, now: Timestamp) -> bool {
    !task.status.is_completed() && task.due_date.is_some_and(|due| due < now)
}

/// Ascending by due date; undated tasks sort after dated ones.
fn by_due_date(a: &&ProductionTask, b: &&ProductionTask) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending by last update; tasks with no update time sort last.
fn by_recent_update(a: &&ProductionTask, b: &&ProductionTask) -> Ordering {
    match (a.updated_at, b.updated_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Partition tasks into pending, in-progress and recently-completed buckets.
///
/// Pending and in-progress are sorted by due date (soonest first). Completed
/// is sorted newest update first and capped at
/// [`RECENTLY_COMPLETED_LIMIT`]. Sorts are stable.
pub fn bucket_tasks(tasks: &[ProductionTask]) -> TaskBuckets<'_> {
    let mut buckets = TaskBuckets::default();
    for task in tasks {
        match task.status {
            WorkStatus::Pending => buckets.pending.push(task),
            WorkStatus::InProgress => buckets.in_progress.push(task),
            WorkStatus::Completed => buckets.recently_completed.push(task),
        }
    }

    buckets.pending.sort_by(by_due_date);
    buckets.in_progress.sort_by(by_due_date);
    buckets.recently_completed.sort_by(by_recent_update);
    buckets.recently_completed.truncate(RECENTLY_COMPLETED_LIMIT);
    buckets
}

pub fn hub_stats(
    projects: &[Project],
    phases: &[ProductionPhase],
    tasks: &[ProductionTask],
    now: Timestamp,
) -> HubStats {
    let count = |status: WorkStatus| tasks.iter().filter(|t| t.status == status).count();

    HubStats {
        total_projects: projects.len(),
        active_phases: phases
            .iter()
            .filter(|p| p.status == WorkStatus::InProgress)
            .count(),
        total_tasks: tasks.len(),
        pending_tasks: count(WorkStatus::Pending),
        in_progress_tasks: count(WorkStatus::InProgress),
        completed_tasks: count(WorkStatus::Completed),
        overdue_tasks: tasks.iter().filter(|t| is_overdue(t, now)).count(),
    }
}

fn task_row(
    task: &ProductionTask,
    people: &NameIndex<'_>,
    projects: &NameIndex<'_>,
    now: Timestamp,
) -> TaskRow {
    TaskRow {
        id: task.id.clone(),
        task_name: task.task_name.clone(),
        project_name: projects
            .resolve_or(task.project_id.as_deref(), NOT_AVAILABLE)
            .to_string(),
        assignee_name: people
            .resolve_or(task.assignee_id.as_deref(), UNASSIGNED)
            .to_string(),
        due_date: task.due_date,
        priority: task.priority,
        status: task.status,
        overdue: is_overdue(task, now),
    }
}

/// Assemble the full production hub view.
pub fn build_hub(
    projects: &[Project],
    phases: &[ProductionPhase],
    tasks: &[ProductionTask],
    cast: &[Person],
    crew: &[Person],
    now: Timestamp,
) -> ProductionHub {
    let people = NameIndex::people(cast, crew);
    let project_names = NameIndex::projects(projects);
    let buckets = bucket_tasks(tasks);

    let rows = |bucket: &[&ProductionTask]| -> Vec<TaskRow> {
        bucket
            .iter()
            .map(|t| task_row(t, &people, &project_names, now))
            .collect()
    };

    ProductionHub {
        stats: hub_stats(projects, phases, tasks, now),
        pending: rows(&buckets.pending),
        in_progress: rows(&buckets.in_progress),
        recently_completed: rows(&buckets.recently_completed),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn task(id: &str, status: WorkStatus, due_in_days: Option<i64>) -> ProductionTask {
        ProductionTask {
            id: id.to_string(),
            task_name: format!("Task {id}"),
            due_date: due_in_days.map(|d| now() + Duration::days(d)),
            priority: Priority::Medium,
            status,
            project_id: None,
            assignee_id: None,
            updated_at: None,
        }
    }

    fn completed_at(id: &str, hours_ago: i64) -> ProductionTask {
        ProductionTask {
            updated_at: Some(now() - Duration::hours(hours_ago)),
            ..task(id, WorkStatus::Completed, None)
        }
    }

    // -- is_overdue ---------------------------------------------------------

    #[test]
    fn past_due_open_task_is_overdue() {
        assert!(is_overdue(&task("a", WorkStatus::Pending, Some(-1)), now()));
        assert!(is_overdue(&task("b", WorkStatus::InProgress, Some(-3)), now()));
    }

    #[test]
    fn completing_a_task_clears_overdue() {
        let mut t = task("a", WorkStatus::InProgress, Some(-1));
        assert!(is_overdue(&t, now()));
        t.status = WorkStatus::Completed;
        assert!(!is_overdue(&t, now()));
    }

    #[test]
    fn due_exactly_now_is_not_overdue() {
        let t = task("a", WorkStatus::Pending, Some(0));
        assert!(!is_overdue(&t, now()));
    }

    #[test]
    fn undated_task_is_never_overdue() {
        assert!(!is_overdue(&task("a", WorkStatus::Pending, None), now()));
    }

    // -- bucket_tasks -------------------------------------------------------

    #[test]
    fn buckets_sort_by_due_date_with_undated_last() {
        let tasks = vec![
            task("late", WorkStatus::Pending, Some(9)),
            task("undated", WorkStatus::Pending, None),
            task("soon", WorkStatus::Pending, Some(1)),
            task("wip", WorkStatus::InProgress, Some(2)),
        ];
        let buckets = bucket_tasks(&tasks);

        let ids: Vec<_> = buckets.pending.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["soon", "late", "undated"]);
        assert_eq!(buckets.in_progress.len(), 1);
        assert!(buckets.recently_completed.is_empty());
    }

    #[test]
    fn recently_completed_is_capped_and_newest_first() {
        let tasks: Vec<_> = (0..15)
            .map(|i| completed_at(&format!("c{i}"), i * 7 % 15))
            .collect();
        let buckets = bucket_tasks(&tasks);

        assert_eq!(buckets.recently_completed.len(), RECENTLY_COMPLETED_LIMIT);
        let stamps: Vec<_> = buckets
            .recently_completed
            .iter()
            .map(|t| t.updated_at.unwrap())
            .collect();
        assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(stamps[0], now());
    }

    #[test]
    fn overdue_is_independent_of_buckets() {
        let tasks = vec![
            task("a", WorkStatus::Pending, Some(-2)),
            task("b", WorkStatus::InProgress, Some(-1)),
            task("c", WorkStatus::Pending, Some(4)),
            ProductionTask {
                due_date: Some(now() - Duration::days(10)),
                ..completed_at("d", 1)
            },
        ];
        let stats = hub_stats(&[], &[], &tasks, now());

        assert_eq!(stats.total_tasks, 4);
        assert_eq!(stats.pending_tasks, 2);
        assert_eq!(stats.in_progress_tasks, 1);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.overdue_tasks, 2);
    }

    // -- build_hub ----------------------------------------------------------

    #[test]
    fn hub_rows_resolve_names_with_placeholders() {
        let projects = vec![Project {
            id: "p1".into(),
            title: "Nightfall".into(),
            description: String::new(),
            poster_url: None,
            release_year: None,
            project_type: String::new(),
            status: String::new(),
            synopsis: None,
            runtime: None,
            genres: vec![],
            trailer_url: None,
            cast_ids: vec![],
            crew_ids: vec![],
        }];
        let crew = vec![Person {
            id: "k1".into(),
            name: "Sam Ito".into(),
            role: "Editor".into(),
            photo_url: None,
        }];
        let tasks = vec![
            ProductionTask {
                project_id: Some("p1".into()),
                assignee_id: Some("k1".into()),
                ..task("known", WorkStatus::Pending, Some(-1))
            },
            ProductionTask {
                project_id: Some("gone".into()),
                assignee_id: Some("nobody".into()),
                ..task("unknown", WorkStatus::Pending, Some(3))
            },
        ];

        let hub = build_hub(&projects, &[], &tasks, &[], &crew, now());

        assert_eq!(hub.pending.len(), 2);
        assert_eq!(hub.pending[0].project_name, "Nightfall");
        assert_eq!(hub.pending[0].assignee_name, "Sam Ito");
        assert!(hub.pending[0].overdue);
        assert_eq!(hub.pending[1].project_name, NOT_AVAILABLE);
        assert_eq!(hub.pending[1].assignee_name, UNASSIGNED);
        assert_eq!(hub.stats.total_projects, 1);
    }
}
