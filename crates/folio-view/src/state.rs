//! View state and its load lifecycle.
//!
//! Provides [`Phase`] and [`ViewState`] for tracking what a section has
//! fetched and where it is in `idle → loading → ready | failed`.
//!
//! # Usage
//!
//! ```rust
//! use folio_view::state::{HasPhase, Phase, ViewState};
//!
//! #[derive(Clone, Default)]
//! struct Counter {
//!     phase: Phase,
//!     value: u32,
//! }
//!
//! impl HasPhase for Counter {
//!     fn phase(&self) -> &Phase {
//!         &self.phase
//!     }
//! }
//!
//! let state = ViewState::new("counter", Counter::default());
//! state.modify(|c| {
//!     c.value = 1;
//!     c.phase = Phase::Ready;
//! });
//! assert!(state.snapshot().phase.is_ready());
//! ```

use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

// ============================================================================
// Phase
// ============================================================================

/// Load phase of a section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Ready,
    /// The last fetch failed; carries the user-facing reason.
    Failed(String),
}

impl Phase {
    /// Returns `true` if the section holds fresh data.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns `true` while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` if the last fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Views that expose a load phase.
pub trait HasPhase {
    /// Current phase.
    fn phase(&self) -> &Phase;
}

// ============================================================================
// ViewState
// ============================================================================

/// Observable state of one section.
///
/// Cheap to clone (Arc internals). Every write is broadcast to all
/// subscribers through a watch channel, so renderers always see whole
/// values, never a half-applied update.
pub struct ViewState<T> {
    inner: Arc<ViewStateInner<T>>,
}

struct ViewStateInner<T> {
    name: String,
    tx: watch::Sender<T>,
}

impl<T> Clone for ViewState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> ViewState<T> {
    /// Create a state holder with an initial value.
    pub fn new(name: impl Into<String>, initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            inner: Arc::new(ViewStateInner {
                name: name.into(),
                tx,
            }),
        }
    }

    /// Section name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Clone of the current value.
    pub fn snapshot(&self) -> T {
        self.inner.tx.borrow().clone()
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.tx.borrow())
    }

    /// Apply one update and notify subscribers.
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        self.inner.tx.send_modify(f);
    }

    /// Apply an update that may decline; subscribers are notified only when
    /// `f` returns `true`.
    pub fn modify_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.inner.tx.send_if_modified(f)
    }

    /// Subscribe to changes.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.inner.tx.subscribe()
    }
}

impl<T: Clone + HasPhase> ViewState<T> {
    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.inner.tx.borrow().phase().clone()
    }

    /// Move to `phase`, logging the transition.
    pub fn set_phase(&self, phase: Phase)
    where
        T: PhaseMut,
    {
        tracing::debug!(section = %self.inner.name, "→ {phase}");
        self.inner
            .tx
            .send_modify(|value| *value.phase_mut() = phase);
    }
}

/// Views whose phase can be replaced in place.
pub trait PhaseMut: HasPhase {
    /// Mutable access to the phase.
    fn phase_mut(&mut self) -> &mut Phase;
}

impl<T: fmt::Debug> fmt::Debug for ViewState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewState")
            .field("name", &self.inner.name)
            .field("value", &*self.inner.tx.borrow())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
