//! `/testimonials` endpoints.

use folio_core::{Ack, NewTestimonial, Testimonial, TestimonialId};

use crate::client::ApiClient;
use crate::error::Result;

/// Client for testimonials.
#[derive(Debug, Clone)]
pub struct TestimonialsClient {
    api: ApiClient,
}

impl TestimonialsClient {
    /// Wrap a shared API client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /testimonials` (active ones only, filtered server-side)
    pub async fn list_all(&self) -> Result<Vec<Testimonial>> {
        self.api.get(&["testimonials"]).await
    }

    /// `POST /testimonials`
    pub async fn create(&self, testimonial: &NewTestimonial) -> Result<Testimonial> {
        self.api.post(&["testimonials"], testimonial).await
    }

    /// `DELETE /testimonials/{id}`
    pub async fn delete(&self, id: &TestimonialId) -> Result<Ack> {
        self.api.delete(&["testimonials", id.as_str()]).await
    }
}
