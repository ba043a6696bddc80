//! About-section controller: the profile and its CV-download counter.

use std::sync::Arc;

use folio_core::Profile;

use crate::error::{Error, Result};
use crate::lifecycle::Scope;
use crate::notify::{Notification, Notifier};
use crate::source::ProfileSource;
use crate::state::{HasPhase, Phase, PhaseMut, ViewState};

const SECTION: &str = "about";

/// Notification text when the profile cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load profile.";

/// State of the about section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileView {
    /// Load phase
    pub phase: Phase,
    /// Last successfully fetched profile, kept across later failures
    pub profile: Option<Profile>,
}

impl HasPhase for ProfileView {
    fn phase(&self) -> &Phase {
        &self.phase
    }
}

impl PhaseMut for ProfileView {
    fn phase_mut(&mut self) -> &mut Phase {
        &mut self.phase
    }
}

/// Controller for the about section.
pub struct ProfileController {
    source: Arc<dyn ProfileSource>,
    notifier: Arc<dyn Notifier>,
    state: ViewState<ProfileView>,
    scope: Scope,
}

impl ProfileController {
    /// Create an idle controller.
    pub fn new(source: Arc<dyn ProfileSource>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            source,
            notifier,
            state: ViewState::new(SECTION, ProfileView::default()),
            scope: Scope::new(),
        }
    }

    /// Bind the controller to an existing scope (e.g. a page scope's child).
    pub fn in_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Observable state.
    pub fn state(&self) -> &ViewState<ProfileView> {
        &self.state
    }

    /// Snapshot of the current state.
    pub fn view(&self) -> ProfileView {
        self.state.snapshot()
    }

    /// Load the profile: `loading`, then `ready` or `failed`.
    ///
    /// On failure a previously loaded profile is left in place.
    pub async fn activate(&self) {
        if !self.scope.is_active() {
            return;
        }
        self.state.set_phase(Phase::Loading);

        let Some(result) = self.scope.run(self.source.get()).await else {
            tracing::debug!(section = SECTION, "Profile load discarded after unmount");
            return;
        };

        match result {
            Ok(profile) => {
                self.state.modify(|view| {
                    view.profile = Some(profile);
                    view.phase = Phase::Ready;
                });
                tracing::debug!(section = SECTION, "→ ready");
            }
            Err(err) => {
                tracing::error!(section = SECTION, error = %err, "Error loading profile");
                self.state.set_phase(Phase::Failed(err.message()));
                self.notifier
                    .notify(Notification::error(LOAD_FAILED_MESSAGE));
            }
        }
    }

    /// Record a CV download and bump the local counter by one.
    ///
    /// Requires a ready section. The new value is always the local value
    /// plus one at the moment the call succeeds; nothing from the response
    /// is trusted. Concurrent calls are allowed and each adds one on
    /// success. On failure the counter is untouched and the user is
    /// notified; nothing is retried.
    ///
    /// Returns the new local counter value.
    pub async fn download_cv(&self) -> Result<u64> {
        let phase = self.state.phase();
        if !phase.is_ready() {
            return Err(Error::NotReady {
                section: SECTION,
                phase,
            });
        }

        let Some(result) = self.scope.run(self.source.increment_cv_download()).await else {
            return Err(Error::Unmounted(SECTION));
        };

        match result {
            Ok(()) => {
                let mut count = 0;
                self.state.modify(|view| {
                    if let Some(profile) = view.profile.as_mut() {
                        profile.record_cv_download();
                        count = profile.cv_download_count;
                    }
                });
                tracing::info!(
                    section = SECTION,
                    cv_download_count = count,
                    "CV downloaded"
                );
                Ok(count)
            }
            Err(err) => {
                tracing::error!(section = SECTION, error = %err, "Error recording CV download");
                let message = format!("CV download failed: {}", err.message());
                self.notifier.notify(Notification::error(message));
                Err(err.into())
            }
        }
    }

    /// Tear the section down. Pending work resolves to a no-op.
    pub fn unmount(&self) {
        self.scope.cancel();
    }
}

impl Drop for ProfileController {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}
