//! `/projects` endpoints.

use folio_core::{Ack, Category, NewProject, Project, ProjectId};

use crate::client::ApiClient;
use crate::error::Result;

/// Client for portfolio projects.
#[derive(Debug, Clone)]
pub struct ProjectsClient {
    api: ApiClient,
}

impl ProjectsClient {
    /// Wrap a shared API client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /projects`
    pub async fn list_all(&self) -> Result<Vec<Project>> {
        self.api.get(&["projects"]).await
    }

    /// `GET /projects/{category}`
    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Project>> {
        self.api.get(&["projects", category.as_str()]).await
    }

    /// `GET /projects/featured`
    pub async fn list_featured(&self) -> Result<Vec<Project>> {
        self.api.get(&["projects", "featured"]).await
    }

    /// `GET /projects/single/{id}`
    pub async fn get_by_id(&self, id: &ProjectId) -> Result<Project> {
        self.api.get(&["projects", "single", id.as_str()]).await
    }

    /// `POST /projects`
    pub async fn create(&self, project: &NewProject) -> Result<Project> {
        self.api.post(&["projects"], project).await
    }

    /// `DELETE /projects/{id}`
    pub async fn delete(&self, id: &ProjectId) -> Result<Ack> {
        self.api.delete(&["projects", id.as_str()]).await
    }
}
