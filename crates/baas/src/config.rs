use std::time::Duration;

/// Collection ids for every collection the site reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collections {
    pub about: String,
    pub projects: String,
    pub cast: String,
    pub crew: String,
    pub departments: String,
    pub department_roles: String,
    pub department_crew: String,
    pub contact: String,
    pub pricing_tiers: String,
    pub phases: String,
    pub phase_steps: String,
    pub tasks: String,
    pub settings: String,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            about: "about".into(),
            projects: "projects".into(),
            cast: "cast".into(),
            crew: "crew".into(),
            departments: "departments".into(),
            department_roles: "department_roles".into(),
            department_crew: "department_crew".into(),
            contact: "contact_info".into(),
            pricing_tiers: "pricing_tiers".into(),
            phases: "production_phases".into(),
            phase_steps: "phase_steps".into(),
            tasks: "production_tasks".into(),
            settings: "site_settings".into(),
        }
    }
}

impl Collections {
    /// Defaults, each overridable by `BAAS_COLLECTION_<NAME>`
    /// (e.g. `BAAS_COLLECTION_PROJECTS`).
    pub fn from_env() -> Self {
        let mut c = Self::default();
        for (name, slot) in [
            ("ABOUT", &mut c.about),
            ("PROJECTS", &mut c.projects),
            ("CAST", &mut c.cast),
            ("CREW", &mut c.crew),
            ("DEPARTMENTS", &mut c.departments),
            ("DEPARTMENT_ROLES", &mut c.department_roles),
            ("DEPARTMENT_CREW", &mut c.department_crew),
            ("CONTACT", &mut c.contact),
            ("PRICING_TIERS", &mut c.pricing_tiers),
            ("PHASES", &mut c.phases),
            ("PHASE_STEPS", &mut c.phase_steps),
            ("TASKS", &mut c.tasks),
            ("SETTINGS", &mut c.settings),
        ] {
            if let Ok(id) = std::env::var(format!("BAAS_COLLECTION_{name}")) {
                if !id.trim().is_empty() {
                    *slot = id.trim().to_string();
                }
            }
        }
        c
    }
}

/// Connection settings for the hosted document store.
///
/// | Env Var             | Default               |
/// |---------------------|-----------------------|
/// | `BAAS_ENDPOINT`     | `http://localhost/v1` |
/// | `BAAS_PROJECT_ID`   | `studio-site`         |
/// | `BAAS_API_KEY`      | unset                 |
/// | `BAAS_DATABASE_ID`  | `main`                |
/// | `BAAS_TIMEOUT_SECS` | `10`                  |
/// | `BAAS_PAGE_LIMIT`   | `500`                 |
#[derive(Debug, Clone)]
pub struct BaasConfig {
    /// Base URL including the API version segment, without trailing slash.
    pub endpoint: String,
    pub project_id: String,
    /// Server API key. Public, permission-scoped reads work without one.
    pub api_key: Option<String>,
    pub database_id: String,
    pub timeout: Duration,
    /// Upper bound on documents requested per collection read.
    pub page_limit: u32,
    pub collections: Collections,
}

impl BaasConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        let endpoint = std::env::var("BAAS_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost/v1".into())
            .trim_end_matches('/')
            .to_string();

        let project_id =
            std::env::var("BAAS_PROJECT_ID").unwrap_or_else(|_| "studio-site".into());

        let api_key = std::env::var("BAAS_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let database_id = std::env::var("BAAS_DATABASE_ID").unwrap_or_else(|_| "main".into());

        let timeout_secs: u64 = std::env::var("BAAS_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("BAAS_TIMEOUT_SECS must be a valid u64");

        let page_limit: u32 = std::env::var("BAAS_PAGE_LIMIT")
            .unwrap_or_else(|_| "500".into())
            .parse()
            .expect("BAAS_PAGE_LIMIT must be a valid u32");

        Self {
            endpoint,
            project_id,
            api_key,
            database_id,
            timeout: Duration::from_secs(timeout_secs),
            page_limit,
            collections: Collections::from_env(),
        }
    }

    /// URL of a collection's document listing.
    pub fn documents_url(&self, collection_id: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, collection_id
        )
    }
}
