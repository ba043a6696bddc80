//! One-shot reveal triggers.
//!
//! A [`Viewport`] receives intersection reports for named targets and
//! forwards them to the [`VisibilityTrigger`]s observing those targets. A
//! trigger flips from hidden to revealed the first time its target is at
//! least [`DEFAULT_THRESHOLD`] visible and never flips back. Dropping a
//! trigger releases its registration.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use tokio::sync::watch;

/// Fraction of the target that must be visible to count as intersecting.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// One intersection observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Visible fraction of the target, `0.0..=1.0`
    pub ratio: f64,
}

impl IntersectionEntry {
    /// Entry with the given visible fraction (clamped to `0.0..=1.0`).
    pub fn new(ratio: f64) -> Self {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        Self { ratio }
    }

    /// Fully visible.
    pub fn visible() -> Self {
        Self::new(1.0)
    }

    /// Out of view.
    pub fn hidden() -> Self {
        Self::new(0.0)
    }

    fn intersects(&self, threshold: f64) -> bool {
        self.ratio > 0.0 && self.ratio >= threshold
    }
}

struct Observer {
    target: String,
    threshold: f64,
    revealed: watch::Sender<bool>,
}

#[derive(Default)]
struct ViewportInner {
    next_id: u64,
    observers: HashMap<u64, Observer>,
}

/// Source of intersection reports for a page.
#[derive(Clone, Default)]
pub struct Viewport {
    inner: Arc<Mutex<ViewportInner>>,
}

impl Viewport {
    /// Empty viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe `target` with the default threshold.
    pub fn observe(&self, target: impl Into<String>) -> VisibilityTrigger {
        self.observe_with_threshold(target, DEFAULT_THRESHOLD)
    }

    /// Observe `target`; it is revealed once at least `threshold` of it is
    /// visible.
    pub fn observe_with_threshold(
        &self,
        target: impl Into<String>,
        threshold: f64,
    ) -> VisibilityTrigger {
        let target = target.into();
        let (tx, rx) = watch::channel(false);
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.observers.insert(
            id,
            Observer {
                target: target.clone(),
                threshold,
                revealed: tx,
            },
        );
        tracing::trace!(target_id = %target, id, "Observing");
        VisibilityTrigger {
            id,
            target,
            rx,
            viewport: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver an observation for `target` to every observer of it.
    ///
    /// Returns the number of observers that were revealed by this report.
    pub fn report(&self, target: &str, entry: IntersectionEntry) -> usize {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner
            .observers
            .values()
            .filter(|observer| observer.target == target)
            .filter(|observer| {
                let hit = entry.intersects(observer.threshold);
                observer.revealed.send_if_modified(|revealed| {
                    if hit && !*revealed {
                        *revealed = true;
                        true
                    } else {
                        false
                    }
                })
            })
            .count()
    }

    /// Number of live observers.
    pub fn observer_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observers
            .len()
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Revealed flag for one observed target.
#[derive(Debug)]
pub struct VisibilityTrigger {
    id: u64,
    target: String,
    rx: watch::Receiver<bool>,
    viewport: Weak<Mutex<ViewportInner>>,
}

impl VisibilityTrigger {
    /// Observed target name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns `true` once the target has been revealed.
    pub fn is_revealed(&self) -> bool {
        *self.rx.borrow()
    }

    /// Receiver that changes exactly once, to `true`.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }

    /// Wait for the reveal. Returns `false` if the viewport went away first.
    pub async fn revealed(&self) -> bool {
        let mut rx = self.rx.clone();
        rx.wait_for(|revealed| *revealed).await.is_ok()
    }
}

impl Drop for VisibilityTrigger {
    fn drop(&mut self) {
        if let Some(inner) = self.viewport.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.observers.remove(&self.id);
            tracing::trace!(target_id = %self.target, id = self.id, "Released");
        }
    }
}
