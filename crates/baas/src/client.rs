//! REST client for the hosted document store.
//!
//! Wraps the document listing endpoint
//! (`GET /databases/{db}/collections/{collection}/documents`) using
//! [`reqwest`], with one pooled client shared by every read.

use async_trait::async_trait;
use lumen_core::models::{
    AboutContent, CastMember, ContactInfo, CrewMember, Department, DepartmentCrew,
    DepartmentRole, PhaseStep, PricingTier, ProductionPhase, ProductionTask, Project,
    SiteSettings,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::BaasConfig;
use crate::error::BaasError;
use crate::query::Query;
use crate::source::ContentSource;

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const KEY_HEADER: &str = "X-Appwrite-Key";

/// Envelope returned by the document listing endpoint. `total` counts every
/// matching document, not just this page.
#[derive(Debug, Deserialize)]
struct DocumentList<T> {
    total: u64,
    documents: Vec<T>,
}

/// HTTP client for the document store.
pub struct BaasClient {
    client: reqwest::Client,
    config: BaasConfig,
}

impl BaasClient {
    /// Create a client with its own connection pool and request timeout.
    pub fn new(config: BaasConfig) -> Result<Self, BaasError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// List every document of a collection matching `filters`.
    ///
    /// Pages of [`BaasConfig::page_limit`] documents are requested with an
    /// increasing `offset` until the store's reported `total` is reached.
    pub async fn list_documents<T: DeserializeOwned>(
        &self,
        collection_id: &str,
        filters: &[Query],
    ) -> Result<Vec<T>, BaasError> {
        let limit = self.config.page_limit.max(1);
        let mut documents: Vec<T> = Vec::new();

        loop {
            let offset = documents.len() as u64;
            let page: DocumentList<T> = self
                .fetch_page(collection_id, filters, limit, offset)
                .await?;
            let received = page.documents.len();
            documents.extend(page.documents);

            if documents.len() as u64 >= page.total {
                break;
            }
            if received == 0 {
                // The store stopped returning documents before its own total.
                tracing::warn!(
                    collection = collection_id,
                    total = page.total,
                    received = documents.len(),
                    "Document listing ended short of reported total"
                );
                break;
            }
        }

        tracing::debug!(
            collection = collection_id,
            count = documents.len(),
            "Documents received"
        );
        Ok(documents)
    }

    /// First document of a singleton collection, if any.
    pub async fn first_document<T: DeserializeOwned>(
        &self,
        collection_id: &str,
    ) -> Result<Option<T>, BaasError> {
        let page: DocumentList<T> = self.fetch_page(collection_id, &[], 1, 0).await?;
        Ok(page.documents.into_iter().next())
    }

    // ---- private helpers ----

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        collection_id: &str,
        filters: &[Query],
        limit: u32,
        offset: u64,
    ) -> Result<DocumentList<T>, BaasError> {
        let mut queries: Vec<Query> = filters.to_vec();
        queries.push(Query::Limit(limit));
        if offset > 0 {
            queries.push(Query::Offset(offset));
        }
        let params: Vec<(&str, String)> = queries
            .iter()
            .map(|q| ("queries[]", q.to_param()))
            .collect();

        tracing::debug!(
            collection = collection_id,
            filters = filters.len(),
            offset,
            "Listing documents"
        );

        let mut request = self
            .client
            .get(self.config.documents_url(collection_id))
            .header(PROJECT_HEADER, &self.config.project_id)
            .query(&params);
        if let Some(key) = &self.config.api_key {
            request = request.header(KEY_HEADER, key);
        }

        let response = Self::ensure_success(request.send().await?).await?;
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|source| BaasError::Decode {
            collection: collection_id.to_string(),
            source,
        })
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`BaasError::Api`] containing
    /// the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, BaasError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(BaasError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ContentSource for BaasClient {
    async fn get_about_content(&self) -> Result<Option<AboutContent>, BaasError> {
        self.first_document(&self.config.collections.about).await
    }

    async fn get_projects(&self) -> Result<Vec<Project>, BaasError> {
        self.list_documents(&self.config.collections.projects, &[])
            .await
    }

    async fn get_cast(&self) -> Result<Vec<CastMember>, BaasError> {
        self.list_documents(&self.config.collections.cast, &[]).await
    }

    async fn get_crew(&self) -> Result<Vec<CrewMember>, BaasError> {
        self.list_documents(&self.config.collections.crew, &[]).await
    }

    async fn get_all_department_roles(&self) -> Result<Vec<DepartmentRole>, BaasError> {
        self.list_documents(&self.config.collections.department_roles, &[])
            .await
    }

    async fn get_all_department_crew(&self) -> Result<Vec<DepartmentCrew>, BaasError> {
        self.list_documents(&self.config.collections.department_crew, &[])
            .await
    }

    async fn get_departments(&self) -> Result<Vec<Department>, BaasError> {
        self.list_documents(&self.config.collections.departments, &[])
            .await
    }

    async fn get_static_contact_info(&self) -> Result<Option<ContactInfo>, BaasError> {
        self.first_document(&self.config.collections.contact).await
    }

    async fn get_pricing_tiers(&self) -> Result<Vec<PricingTier>, BaasError> {
        self.list_documents(&self.config.collections.pricing_tiers, &[])
            .await
    }

    async fn get_site_settings(&self) -> Result<Option<SiteSettings>, BaasError> {
        self.first_document(&self.config.collections.settings).await
    }

    async fn get_production_phases_for_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProductionPhase>, BaasError> {
        self.list_documents(
            &self.config.collections.phases,
            &[Query::equal("projectId", project_id)],
        )
        .await
    }

    async fn get_phase_steps_for_phase(
        &self,
        phase_id: &str,
    ) -> Result<Vec<PhaseStep>, BaasError> {
        self.list_documents(
            &self.config.collections.phase_steps,
            &[Query::equal("phaseId", phase_id)],
        )
        .await
    }

    async fn get_all_production_phases(&self) -> Result<Vec<ProductionPhase>, BaasError> {
        self.list_documents(&self.config.collections.phases, &[])
            .await
    }

    async fn get_production_tasks(&self) -> Result<Vec<ProductionTask>, BaasError> {
        self.list_documents(&self.config.collections.tasks, &[])
            .await
    }

    async fn health_check(&self) -> Result<(), BaasError> {
        let response = self
            .client
            .get(format!("{}/health/version", self.config.endpoint))
            .header(PROJECT_HEADER, &self.config.project_id)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
