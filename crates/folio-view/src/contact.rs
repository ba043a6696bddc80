//! Contact section: a draft form and its single-shot submission.

use std::sync::Arc;

use folio_core::NewContact;

use crate::error::{Error, Result};
use crate::lifecycle::Scope;
use crate::notify::{Notification, Notifier};
use crate::source::ContactSender;
use crate::state::ViewState;

const SECTION: &str = "contact";

/// Notification text after a successful submission.
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// State of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormView {
    /// Current field values
    pub draft: NewContact,
    /// A submission is in flight; resubmission is disabled
    pub submitting: bool,
}

impl ContactFormView {
    /// Returns `true` if the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.draft.is_complete()
    }
}

/// Which draft field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Sender name
    Name,
    /// Sender email
    Email,
    /// Message body
    Message,
}

/// The contact form and its submission flow.
pub struct ContactForm {
    sender: Arc<dyn ContactSender>,
    notifier: Arc<dyn Notifier>,
    state: ViewState<ContactFormView>,
    scope: Scope,
}

impl ContactForm {
    /// Create an empty form.
    pub fn new(sender: Arc<dyn ContactSender>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            sender,
            notifier,
            state: ViewState::new(SECTION, ContactFormView::default()),
            scope: Scope::new(),
        }
    }

    /// Bind the form to an existing scope.
    pub fn in_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Observable state.
    pub fn state(&self) -> &ViewState<ContactFormView> {
        &self.state
    }

    /// Snapshot of the current state.
    pub fn view(&self) -> ContactFormView {
        self.state.snapshot()
    }

    /// Replace one field of the draft.
    pub fn set(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.state.modify(|view| {
            let slot = match field {
                Field::Name => &mut view.draft.name,
                Field::Email => &mut view.draft.email,
                Field::Message => &mut view.draft.message,
            };
            *slot = value;
        });
    }

    /// Replace the whole draft.
    pub fn fill(&self, draft: NewContact) {
        self.state.modify(|view| view.draft = draft);
    }

    /// Submit the current draft.
    ///
    /// Refused while another submission is pending or when a field is blank.
    /// On success the draft is cleared; on failure it is kept as entered. In
    /// both cases the user is notified.
    pub async fn submit(&self) -> Result<()> {
        let mut claim = Err(Error::SubmissionPending);
        self.state.modify_if(|view| {
            if view.submitting {
                return false;
            }
            if !view.draft.is_complete() {
                claim = Err(Error::IncompleteForm);
                return false;
            }
            view.submitting = true;
            claim = Ok(view.draft.clone());
            true
        });
        let draft = claim?;

        let Some(result) = self.scope.run(self.sender.send(&draft)).await else {
            return Err(Error::Unmounted(SECTION));
        };

        match result {
            Ok(()) => {
                self.state.modify(|view| {
                    view.draft = NewContact::default();
                    view.submitting = false;
                });
                tracing::info!(section = SECTION, "Contact message sent");
                self.notifier.notify(Notification::success(SENT_MESSAGE));
                Ok(())
            }
            Err(err) => {
                tracing::error!(section = SECTION, error = %err, "Error sending message");
                self.state.modify(|view| view.submitting = false);
                let message = format!("Failed to send message: {}", err.message());
                self.notifier.notify(Notification::error(message));
                Err(err.into())
            }
        }
    }

    /// Tear the form down. A pending submission resolves to a no-op.
    pub fn unmount(&self) {
        self.scope.cancel();
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}
