//! Data-source capabilities consumed by the controllers.
//!
//! Controllers only see these traits. Whether content comes from the live
//! API or the built-in catalogue is decided once, in [`Sources::from_config`].

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use folio_client::{
    ApiClient, ContactsClient, ProfileClient, ProjectsClient, TestimonialsClient, TransportError,
};
use folio_core::{
    Category, Config, DataSource, NewContact, Profile, Project, ProjectId, Testimonial,
};

use crate::catalog::StaticCatalog;

/// Result of a data-source call.
pub type SourceResult<T> = std::result::Result<T, TransportError>;

/// Capability: a categorised project source.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Projects of one category, in source order.
    async fn list_by_category(&self, category: Category) -> SourceResult<Vec<Project>>;
}

/// Capability: read-only access to the whole project catalogue.
#[async_trait]
pub trait ProjectCatalog: ProjectSource {
    /// Every project.
    async fn list_all(&self) -> SourceResult<Vec<Project>>;

    /// Featured projects only.
    async fn list_featured(&self) -> SourceResult<Vec<Project>>;

    /// One project. A missing id is a 404.
    async fn get_by_id(&self, id: &ProjectId) -> SourceResult<Project>;
}

/// Capability: read testimonials.
#[async_trait]
pub trait TestimonialSource: Send + Sync {
    /// Every testimonial.
    async fn list_testimonials(&self) -> SourceResult<Vec<Testimonial>>;
}

/// Capability: the profile and its download counter.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the whole profile.
    async fn get(&self) -> SourceResult<Profile>;

    /// Record one CV download.
    async fn increment_cv_download(&self) -> SourceResult<()>;
}

/// Capability: deliver a contact submission.
#[async_trait]
pub trait ContactSender: Send + Sync {
    /// Send `contact`. Success means it was accepted.
    async fn send(&self, contact: &NewContact) -> SourceResult<()>;
}

// ============================================================================
// Remote implementations
// ============================================================================

#[async_trait]
impl ProjectSource for ProjectsClient {
    async fn list_by_category(&self, category: Category) -> SourceResult<Vec<Project>> {
        ProjectsClient::list_by_category(self, category).await
    }
}

#[async_trait]
impl ProjectCatalog for ProjectsClient {
    async fn list_all(&self) -> SourceResult<Vec<Project>> {
        ProjectsClient::list_all(self).await
    }

    async fn list_featured(&self) -> SourceResult<Vec<Project>> {
        ProjectsClient::list_featured(self).await
    }

    async fn get_by_id(&self, id: &ProjectId) -> SourceResult<Project> {
        ProjectsClient::get_by_id(self, id).await
    }
}

#[async_trait]
impl TestimonialSource for TestimonialsClient {
    async fn list_testimonials(&self) -> SourceResult<Vec<Testimonial>> {
        self.list_all().await
    }
}

#[async_trait]
impl ProfileSource for ProfileClient {
    async fn get(&self) -> SourceResult<Profile> {
        ProfileClient::get(self).await
    }

    async fn increment_cv_download(&self) -> SourceResult<()> {
        ProfileClient::increment_cv_download(self).await.map(|_| ())
    }
}

#[async_trait]
impl ContactSender for ContactsClient {
    async fn send(&self, contact: &NewContact) -> SourceResult<()> {
        let created = self.create(contact).await?;
        tracing::debug!(id = %created.id, "Contact stored");
        Ok(())
    }
}

// ============================================================================
// Simulated sender
// ============================================================================

/// Fixed delay used by [`SimulatedContactSender`].
pub const SIMULATED_SEND_DELAY: Duration = Duration::from_secs(1);

/// Contact sender that waits a fixed delay and always succeeds.
///
/// Stands in for a real delivery channel when no backend is configured.
#[derive(Debug, Clone)]
pub struct SimulatedContactSender {
    delay: Duration,
}

impl SimulatedContactSender {
    /// Sender with the default one second delay.
    pub fn new() -> Self {
        Self::with_delay(SIMULATED_SEND_DELAY)
    }

    /// Sender with a custom delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedContactSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactSender for SimulatedContactSender {
    async fn send(&self, contact: &NewContact) -> SourceResult<()> {
        tracing::info!(email = %contact.email, "Simulated contact submission");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

// ============================================================================
// Selection
// ============================================================================

/// The data sources a page is built from.
#[derive(Clone)]
pub struct Sources {
    /// Categorised projects
    pub projects: Arc<dyn ProjectSource>,
    /// Profile and CV counter
    pub profile: Arc<dyn ProfileSource>,
    /// Contact delivery
    pub contact: Arc<dyn ContactSender>,
}

impl Sources {
    /// Pick implementations according to `config.data_source`.
    pub fn from_config(config: &Config) -> folio_core::Result<Self> {
        tracing::info!(data_source = %config.data_source, "Selecting content source");
        match config.data_source {
            DataSource::Remote => Ok(Self::remote(ApiClient::from_config(config)?)),
            DataSource::Static => Ok(Self::in_memory(Arc::new(StaticCatalog::new()))),
        }
    }

    /// Live API sources sharing one client.
    pub fn remote(api: ApiClient) -> Self {
        Self {
            projects: Arc::new(ProjectsClient::new(api.clone())),
            profile: Arc::new(ProfileClient::new(api.clone())),
            contact: Arc::new(ContactsClient::new(api)),
        }
    }

    /// Built-in catalogue with a simulated contact sender.
    pub fn in_memory(catalog: Arc<StaticCatalog>) -> Self {
        Self {
            projects: catalog.clone(),
            profile: catalog,
            contact: Arc::new(SimulatedContactSender::new()),
        }
    }
}

impl std::fmt::Debug for Sources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sources").finish_non_exhaustive()
    }
}
