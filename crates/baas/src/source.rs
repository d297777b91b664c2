use async_trait::async_trait;
use lumen_core::models::{
    AboutContent, CastMember, ContactInfo, CrewMember, Department, DepartmentCrew,
    DepartmentRole, PhaseStep, PricingTier, ProductionPhase, ProductionTask, Project,
    SiteSettings,
};

use crate::error::BaasError;

/// Read access to every collection the site is built from.
///
/// Implementations must be cheap to share behind an `Arc`; handlers call
/// these concurrently. Singleton collections return `None` when the
/// document has not been created yet.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn get_about_content(&self) -> Result<Option<AboutContent>, BaasError>;

    async fn get_projects(&self) -> Result<Vec<Project>, BaasError>;

    async fn get_cast(&self) -> Result<Vec<CastMember>, BaasError>;

    async fn get_crew(&self) -> Result<Vec<CrewMember>, BaasError>;

    async fn get_all_department_roles(&self) -> Result<Vec<DepartmentRole>, BaasError>;

    async fn get_all_department_crew(&self) -> Result<Vec<DepartmentCrew>, BaasError>;

    async fn get_departments(&self) -> Result<Vec<Department>, BaasError>;

    async fn get_static_contact_info(&self) -> Result<Option<ContactInfo>, BaasError>;

    async fn get_pricing_tiers(&self) -> Result<Vec<PricingTier>, BaasError>;

    async fn get_site_settings(&self) -> Result<Option<SiteSettings>, BaasError>;

    async fn get_production_phases_for_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProductionPhase>, BaasError>;

    async fn get_phase_steps_for_phase(&self, phase_id: &str)
        -> Result<Vec<PhaseStep>, BaasError>;

    /// Phases across every project (production dashboard).
    async fn get_all_production_phases(&self) -> Result<Vec<ProductionPhase>, BaasError>;

    async fn get_production_tasks(&self) -> Result<Vec<ProductionTask>, BaasError>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> Result<(), BaasError>;
}
