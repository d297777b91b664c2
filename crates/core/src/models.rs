//! Document shapes for every BaaS collection the site reads.
//!
//! Attribute names follow the BaaS wire format (camelCase, `$`-prefixed
//! system attributes). Optional and list attributes tolerate `null` and
//! absence so a sparsely filled document still decodes.

use serde::{Deserialize, Serialize};

use crate::types::{lenient_timestamp, null_as_default, DocId, Timestamp};

// ---------------------------------------------------------------------------
// Status enums
// ---------------------------------------------------------------------------

/// Progress state shared by phases, phase steps and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>")]
pub enum WorkStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl WorkStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkStatus::Pending => "Pending",
            WorkStatus::InProgress => "In Progress",
            WorkStatus::Completed => "Completed",
        }
    }

    pub fn is_completed(self) -> bool {
        self == WorkStatus::Completed
    }
}

impl From<Option<String>> for WorkStatus {
    /// Lenient decode: case and separators are ignored, unknown or `null`
    /// values are treated as `Pending`.
    fn from(raw: Option<String>) -> Self {
        let normalized: String = raw
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "inprogress" | "active" => WorkStatus::InProgress,
            "completed" | "complete" | "done" => WorkStatus::Completed,
            _ => WorkStatus::Pending,
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl From<Option<String>> for Priority {
    fn from(raw: Option<String>) -> Self {
        match raw.unwrap_or_default().trim().to_ascii_lowercase().as_str() {
            "low" => Priority::Low,
            "high" => Priority::High,
            "critical" => Priority::Critical,
            _ => Priority::Medium,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

/// A film, series or commercial shown on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "$id")]
    pub id: DocId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub project_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    /// Running time in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast_ids: Vec<DocId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crew_ids: Vec<DocId>,
}

/// A performer or crew member. Cast and crew share a shape but live in
/// separate collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "$id")]
    pub id: DocId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

pub type CastMember = Person;
pub type CrewMember = Person;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(rename = "$id")]
    pub id: DocId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRole {
    #[serde(rename = "$id")]
    pub id: DocId,
    pub department_id: DocId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role_name: String,
}

/// Join document placing a crew member in a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCrew {
    #[serde(rename = "$id")]
    pub id: DocId,
    pub department_id: DocId,
    pub crew_member_id: DocId,
    #[serde(default)]
    pub role_id: Option<DocId>,
}

// ---------------------------------------------------------------------------
// Singletons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(rename = "$id")]
    pub id: DocId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub mission: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Site-wide settings document.
///
/// `social_links` and `footer_links` hold JSON-encoded arrays (or, on newer
/// documents, real arrays); decode them with [`crate::settings::decode_links`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub site_name: String,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub hero_video_url: Option<String>,
    #[serde(default)]
    pub footer_text: Option<String>,
    #[serde(default)]
    pub social_links: Option<serde_json::Value>,
    #[serde(default)]
    pub footer_links: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Production tracking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPhase {
    #[serde(rename = "$id")]
    pub id: DocId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phase_name: String,
    #[serde(default)]
    pub status: WorkStatus,
    pub project_id: DocId,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub end_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseStep {
    #[serde(rename = "$id")]
    pub id: DocId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub step_name: String,
    #[serde(default)]
    pub status: WorkStatus,
    #[serde(default)]
    pub description: Option<String>,
    pub phase_id: DocId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionTask {
    #[serde(rename = "$id")]
    pub id: DocId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub task_name: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: WorkStatus,
    #[serde(default)]
    pub project_id: Option<DocId>,
    #[serde(default)]
    pub assignee_id: Option<DocId>,
    #[serde(
        rename = "$updatedAt",
        default,
        deserialize_with = "lenient_timestamp"
    )]
    pub updated_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    #[serde(rename = "$id")]
    pub id: DocId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_monthly: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_yearly: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub featured: bool,
}

fn default_currency() -> String {
    "USD".to_string()
}
