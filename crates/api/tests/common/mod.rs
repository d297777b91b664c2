#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use lumen_api::config::ServerConfig;
use lumen_api::router::build_app_router;
use lumen_api::state::AppState;
use lumen_baas::{BaasError, ContentSource, Fixture, FixtureSource};
use lumen_core::models::{
    AboutContent, CastMember, ContactInfo, CrewMember, Department, DepartmentCrew,
    DepartmentRole, PhaseStep, PricingTier, ProductionPhase, ProductionTask, Project,
    SiteSettings,
};
use serde_json::json;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        content_fixture_path: None,
    }
}

/// Build the full application router over `source`, with the same
/// middleware stack `main.rs` uses.
pub fn build_test_app(source: impl ContentSource + 'static) -> Router {
    let config = test_config();
    let state = AppState {
        source: Arc::new(source),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Shorthand for an app serving [`sample_fixture`].
pub fn sample_app() -> Router {
    build_test_app(FixtureSource::new(sample_fixture()))
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Sample content
// ---------------------------------------------------------------------------

/// A small studio: two projects, one with three phases (one completed, one
/// in progress), departments, pricing and four tasks.
pub fn sample_fixture() -> Fixture {
    serde_json::from_value(json!({
        "about": {
            "$id": "about",
            "heading": "About Lumen",
            "body": "We make films.",
            "mission": "Light first."
        },
        "contact": { "email": "hello@lumen.film", "phone": "+44 20 0000 0000" },
        "settings": {
            "siteName": "Lumen Pictures",
            "heroTitle": "Stories in the dark",
            "footerText": "Made in London",
            "socialLinks": "[{\"platform\":\"instagram\",\"url\":\"https://instagram.com/lumen\"}]",
            "footerLinks": [{ "label": "Privacy", "url": "/privacy" }]
        },
        "projects": [
            {
                "$id": "p1",
                "title": "Nightfall",
                "description": "A city without sunrise.",
                "type": "Feature",
                "status": "In Production",
                "releaseYear": 2025,
                "runtime": 112,
                "genres": ["Drama"],
                "castIds": ["c1", "c-missing"],
                "crewIds": ["w1"]
            },
            { "$id": "p2", "title": "Harbour Lights", "type": "Documentary" }
        ],
        "cast": [{ "$id": "c1", "name": "Ada Quill", "role": "Lead" }],
        "crew": [
            { "$id": "w1", "name": "Ben Arlo", "role": "Director" },
            { "$id": "w2", "name": "Cleo Marsh", "role": "Editor" }
        ],
        "departments": [
            { "$id": "d2", "name": "Post", "order": 2 },
            { "$id": "d1", "name": "Camera", "order": 1 }
        ],
        "departmentRoles": [
            { "$id": "r1", "departmentId": "d1", "roleName": "Director of Photography" }
        ],
        "departmentCrew": [
            { "$id": "dc1", "departmentId": "d1", "crewMemberId": "w1", "roleId": "r1" },
            { "$id": "dc2", "departmentId": "d2", "crewMemberId": "w2" }
        ],
        "pricingTiers": [
            {
                "$id": "t2", "title": "Studio", "priceMonthly": 99.0, "priceYearly": 990.0,
                "order": 2, "featured": true, "features": ["Everything"]
            },
            {
                "$id": "t1", "title": "Indie", "priceMonthly": 29.0, "priceYearly": 290.0,
                "order": 1, "features": ["Screenings"]
            }
        ],
        "phases": [
            { "$id": "ph1", "phaseName": "Development", "status": "Completed", "projectId": "p1" },
            { "$id": "ph2", "phaseName": "Production", "status": "In Progress", "projectId": "p1" },
            { "$id": "ph3", "phaseName": "Post", "status": "Pending", "projectId": "p1" }
        ],
        "phaseSteps": [
            { "$id": "s1", "stepName": "Script lock", "status": "Completed", "phaseId": "ph1" },
            { "$id": "s2", "stepName": "Casting", "status": "Completed", "phaseId": "ph1" },
            { "$id": "s3", "stepName": "Block A", "status": "Completed", "phaseId": "ph2" },
            { "$id": "s4", "stepName": "Block B", "status": "Pending", "phaseId": "ph2" },
            { "$id": "s5", "stepName": "Block C", "status": "Pending", "phaseId": "ph2" }
        ],
        "tasks": [
            {
                "$id": "task-late", "taskName": "Lock budget", "status": "Pending",
                "dueDate": "2020-01-01", "projectId": "p1", "assigneeId": "w1",
                "priority": "High"
            },
            {
                "$id": "task-later", "taskName": "Book stage", "status": "Pending",
                "dueDate": "2099-01-01", "projectId": "p2", "assigneeId": "nobody"
            },
            {
                "$id": "task-open", "taskName": "Colour pass", "status": "In Progress",
                "dueDate": null, "projectId": "gone"
            },
            {
                "$id": "task-done", "taskName": "Wrap party", "status": "Completed",
                "dueDate": "2020-01-01", "projectId": "p1",
                "$updatedAt": "2024-05-01T00:00:00.000+00:00"
            }
        ]
    }))
    .unwrap()
}

// ---------------------------------------------------------------------------
// Fault injection
// ---------------------------------------------------------------------------

/// Which reads a [`FaultySource`] breaks.
#[derive(Debug, Clone, Copy)]
pub enum Fault {
    /// Every read fails, including the health probe.
    Everything,
    /// Only the per-project phase read fails.
    Phases,
    /// The step read for this phase fails.
    StepsFor(&'static str),
    /// The per-project phase read never completes.
    StallPhases,
    /// The step read for this phase never completes.
    StallStepsFor(&'static str),
}

/// A [`FixtureSource`] with one injected fault.
pub struct FaultySource {
    inner: FixtureSource,
    fault: Fault,
}

impl FaultySource {
    pub fn new(fixture: Fixture, fault: Fault) -> Self {
        Self {
            inner: FixtureSource::new(fixture),
            fault,
        }
    }

    fn check(&self) -> Result<(), BaasError> {
        match self.fault {
            Fault::Everything => Err(injected()),
            _ => Ok(()),
        }
    }
}

fn injected() -> BaasError {
    BaasError::Api {
        status: 503,
        body: "injected failure".to_string(),
    }
}

#[async_trait]
impl ContentSource for FaultySource {
    async fn get_about_content(&self) -> Result<Option<AboutContent>, BaasError> {
        self.check()?;
        self.inner.get_about_content().await
    }

    async fn get_projects(&self) -> Result<Vec<Project>, BaasError> {
        self.check()?;
        self.inner.get_projects().await
    }

    async fn get_cast(&self) -> Result<Vec<CastMember>, BaasError> {
        self.check()?;
        self.inner.get_cast().await
    }

    async fn get_crew(&self) -> Result<Vec<CrewMember>, BaasError> {
        self.check()?;
        self.inner.get_crew().await
    }

    async fn get_all_department_roles(&self) -> Result<Vec<DepartmentRole>, BaasError> {
        self.check()?;
        self.inner.get_all_department_roles().await
    }

    async fn get_all_department_crew(&self) -> Result<Vec<DepartmentCrew>, BaasError> {
        self.check()?;
        self.inner.get_all_department_crew().await
    }

    async fn get_departments(&self) -> Result<Vec<Department>, BaasError> {
        self.check()?;
        self.inner.get_departments().await
    }

    async fn get_static_contact_info(&self) -> Result<Option<ContactInfo>, BaasError> {
        self.check()?;
        self.inner.get_static_contact_info().await
    }

    async fn get_pricing_tiers(&self) -> Result<Vec<PricingTier>, BaasError> {
        self.check()?;
        self.inner.get_pricing_tiers().await
    }

    async fn get_site_settings(&self) -> Result<Option<SiteSettings>, BaasError> {
        self.check()?;
        self.inner.get_site_settings().await
    }

    async fn get_production_phases_for_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProductionPhase>, BaasError> {
        self.check()?;
        match self.fault {
            Fault::Phases => Err(injected()),
            Fault::StallPhases => std::future::pending().await,
            _ => self.inner.get_production_phases_for_project(project_id).await,
        }
    }

    async fn get_phase_steps_for_phase(
        &self,
        phase_id: &str,
    ) -> Result<Vec<PhaseStep>, BaasError> {
        self.check()?;
        match self.fault {
            Fault::StepsFor(id) if id == phase_id => Err(injected()),
            Fault::StallStepsFor(id) if id == phase_id => std::future::pending().await,
            _ => self.inner.get_phase_steps_for_phase(phase_id).await,
        }
    }

    async fn get_all_production_phases(&self) -> Result<Vec<ProductionPhase>, BaasError> {
        self.check()?;
        self.inner.get_all_production_phases().await
    }

    async fn get_production_tasks(&self) -> Result<Vec<ProductionTask>, BaasError> {
        self.check()?;
        self.inner.get_production_tasks().await
    }

    async fn health_check(&self) -> Result<(), BaasError> {
        self.check()?;
        self.inner.health_check().await
    }
}
