//! # folio-client
//!
//! Rust client library for the portfolio content API.
//!
//! This crate provides:
//! - [`ApiClient`]: the single transport, with a fixed timeout, JSON
//!   content negotiation and request/failure hooks
//! - Resource clients ([`ProjectsClient`], [`ContactsClient`],
//!   [`TestimonialsClient`], [`ProfileClient`]) mapping domain operations
//!   1:1 onto endpoints
//! - [`TransportError`], the only error kind these operations produce
//!
//! Nothing here retries, backs off or caches. Callers decide what a failure
//! means.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod hooks;
pub mod resources;

pub use client::{ApiClient, ApiClientBuilder, DEFAULT_TIMEOUT};
pub use error::{Result, TransportError};
pub use hooks::{Hook, RequestInfo, TracingHook};
pub use resources::{ContactsClient, ProfileClient, ProjectsClient, TestimonialsClient};
