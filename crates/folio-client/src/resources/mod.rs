//! Resource clients.
//!
//! Thin typed facades over [`ApiClient`](crate::ApiClient). Each operation is
//! exactly one endpoint call; none of them catch, retry or cache.

mod contacts;
mod profile;
mod projects;
mod testimonials;

pub use contacts::ContactsClient;
pub use profile::ProfileClient;
pub use projects::ProjectsClient;
pub use testimonials::TestimonialsClient;
