//! `/contacts` endpoints.

use folio_core::{Ack, Contact, ContactId, NewContact};

use crate::client::ApiClient;
use crate::error::Result;

/// Client for contact submissions.
#[derive(Debug, Clone)]
pub struct ContactsClient {
    api: ApiClient,
}

impl ContactsClient {
    /// Wrap a shared API client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `POST /contacts`
    pub async fn create(&self, contact: &NewContact) -> Result<Contact> {
        self.api.post(&["contacts"], contact).await
    }

    /// `GET /contacts`, newest first.
    pub async fn list_all(&self) -> Result<Vec<Contact>> {
        self.api.get(&["contacts"]).await
    }

    /// `PATCH /contacts/{id}/read`. Repeating it is harmless.
    pub async fn mark_read(&self, id: &ContactId) -> Result<Ack> {
        self.api
            .patch_empty(&["contacts", id.as_str(), "read"])
            .await
    }
}
