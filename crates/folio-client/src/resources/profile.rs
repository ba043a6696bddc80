//! `/profile` endpoints.

use folio_core::{Ack, Profile, ProfileUpdate};

use crate::client::ApiClient;
use crate::error::Result;

/// Client for the singleton profile.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    api: ApiClient,
}

impl ProfileClient {
    /// Wrap a shared API client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /profile`
    pub async fn get(&self) -> Result<Profile> {
        self.api.get(&["profile"]).await
    }

    /// `PATCH /profile` with only the fields set in `update`.
    pub async fn update(&self, update: &ProfileUpdate) -> Result<Profile> {
        self.api.patch(&["profile"], update).await
    }

    /// `POST /profile/cv-download`
    ///
    /// The server increments its counter. The acknowledgement does not
    /// reliably carry the new value, so callers derive it locally.
    pub async fn increment_cv_download(&self) -> Result<Ack> {
        self.api.post_empty(&["profile", "cv-download"]).await
    }
}
