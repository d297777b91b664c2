//! File-backed content source.
//!
//! A fixture is one JSON object holding every collection, keyed by
//! collection name, with documents in the same wire format the document
//! store returns. Missing collections are empty.

use std::path::Path;

use async_trait::async_trait;
use lumen_core::models::{
    AboutContent, CastMember, ContactInfo, CrewMember, Department, DepartmentCrew,
    DepartmentRole, PhaseStep, PricingTier, ProductionPhase, ProductionTask, Project,
    SiteSettings,
};
use serde::{Deserialize, Serialize};

use crate::error::BaasError;
use crate::source::ContentSource;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fixture {
    pub about: Option<AboutContent>,
    pub projects: Vec<Project>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub departments: Vec<Department>,
    pub department_roles: Vec<DepartmentRole>,
    pub department_crew: Vec<DepartmentCrew>,
    pub contact: Option<ContactInfo>,
    pub pricing_tiers: Vec<PricingTier>,
    pub settings: Option<SiteSettings>,
    pub phases: Vec<ProductionPhase>,
    pub phase_steps: Vec<PhaseStep>,
    pub tasks: Vec<ProductionTask>,
}

/// Serves every read from an in-memory [`Fixture`].
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    fixture: Fixture,
}

impl FixtureSource {
    pub fn new(fixture: Fixture) -> Self {
        Self { fixture }
    }

    /// Load a fixture file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BaasError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| BaasError::FixtureIo {
            path: path.display().to_string(),
            source,
        })?;
        let fixture = serde_json::from_str(&raw).map_err(|source| BaasError::FixtureFormat {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(fixture))
    }
}

#[async_trait]
impl ContentSource for FixtureSource {
    async fn get_about_content(&self) -> Result<Option<AboutContent>, BaasError> {
        Ok(self.fixture.about.clone())
    }

    async fn get_projects(&self) -> Result<Vec<Project>, BaasError> {
        Ok(self.fixture.projects.clone())
    }

    async fn get_cast(&self) -> Result<Vec<CastMember>, BaasError> {
        Ok(self.fixture.cast.clone())
    }

    async fn get_crew(&self) -> Result<Vec<CrewMember>, BaasError> {
        Ok(self.fixture.crew.clone())
    }

    async fn get_all_department_roles(&self) -> Result<Vec<DepartmentRole>, BaasError> {
        Ok(self.fixture.department_roles.clone())
    }

    async fn get_all_department_crew(&self) -> Result<Vec<DepartmentCrew>, BaasError> {
        Ok(self.fixture.department_crew.clone())
    }

    async fn get_departments(&self) -> Result<Vec<Department>, BaasError> {
        Ok(self.fixture.departments.clone())
    }

    async fn get_static_contact_info(&self) -> Result<Option<ContactInfo>, BaasError> {
        Ok(self.fixture.contact.clone())
    }

    async fn get_pricing_tiers(&self) -> Result<Vec<PricingTier>, BaasError> {
        Ok(self.fixture.pricing_tiers.clone())
    }

    async fn get_site_settings(&self) -> Result<Option<SiteSettings>, BaasError> {
        Ok(self.fixture.settings.clone())
    }

    async fn get_production_phases_for_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProductionPhase>, BaasError> {
        Ok(self
            .fixture
            .phases
            .iter()
            .filter(|p| p.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn get_phase_steps_for_phase(
        &self,
        phase_id: &str,
    ) -> Result<Vec<PhaseStep>, BaasError> {
        Ok(self
            .fixture
            .phase_steps
            .iter()
            .filter(|s| s.phase_id == phase_id)
            .cloned()
            .collect())
    }

    async fn get_all_production_phases(&self) -> Result<Vec<ProductionPhase>, BaasError> {
        Ok(self.fixture.phases.clone())
    }

    async fn get_production_tasks(&self) -> Result<Vec<ProductionTask>, BaasError> {
        Ok(self.fixture.tasks.clone())
    }

    async fn health_check(&self) -> Result<(), BaasError> {
        Ok(())
    }
}
