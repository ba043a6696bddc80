//! Error types for folio-view

use thiserror::Error;

use crate::state::Phase;

/// Result type alias for folio-view operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-view
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// A remote call failed; the user has already been notified
    #[error("Transport error: {0}")]
    Transport(#[from] folio_client::TransportError),

    /// The operation needs a loaded section
    #[error("{section} is not ready (state: {phase})")]
    NotReady {
        /// Section name
        section: &'static str,
        /// Phase at the time of the call
        phase: Phase,
    },

    /// The owning section was unmounted before the operation settled
    #[error("{0} was unmounted")]
    Unmounted(&'static str),

    /// A contact submission is already pending
    #[error("A message is already being sent")]
    SubmissionPending,

    /// Required contact fields are blank
    #[error("Name, email and message are required")]
    IncompleteForm,
}
