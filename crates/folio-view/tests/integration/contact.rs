//! Contact submission flow.

use folio_core::NewContact;
use folio_view::contact::SENT_MESSAGE;
use folio_view::notify::Level;
use folio_view::source::{SIMULATED_SEND_DELAY, SimulatedContactSender};
use folio_view::{ContactForm, Error, Field, NotificationCenter};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::common::{ScriptedSender, Step};

fn filled(sender: Arc<ScriptedSender>) -> (ContactForm, Arc<NotificationCenter>) {
    let center = Arc::new(NotificationCenter::new());
    let form = ContactForm::new(sender, center.clone());
    form.set(Field::Name, "Ann");
    form.set(Field::Email, "ann@example.test");
    form.set(Field::Message, "Hello there");
    (form, center)
}

#[tokio::test]
async fn test_success_sends_draft_and_clears() {
    let sender = Arc::new(ScriptedSender::new(Step::Ok(())));
    let (form, center) = filled(sender.clone());

    form.submit().await.unwrap();

    assert_eq!(
        sender.sent.lock().unwrap().as_slice(),
        &[NewContact::new("Ann", "ann@example.test", "Hello there")]
    );
    let view = form.view();
    assert!(view.draft.is_empty());
    assert!(!view.submitting);
    let notes = center.drain();
    assert_eq!(notes[0].level, Level::Success);
    assert_eq!(notes[0].message, SENT_MESSAGE);
}

#[tokio::test]
async fn test_failure_preserves_fields() {
    let sender = Arc::new(ScriptedSender::new(Step::Fail(500, "Service down")));
    let (form, center) = filled(sender);

    let err = form.submit().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    let view = form.view();
    assert_eq!(view.draft.name, "Ann");
    assert_eq!(view.draft.message, "Hello there");
    assert!(!view.submitting);
    let notes = center.drain();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].message, "Failed to send message: Service down");
}

#[tokio::test]
async fn test_resubmission_disabled_while_pending() {
    let gate = Arc::new(Notify::new());
    let sender = Arc::new(ScriptedSender::new(Step::Gated(gate.clone(), ())));
    let (form, _center) = filled(sender.clone());

    let (first, second) = tokio::join!(form.submit(), async {
        tokio::task::yield_now().await;
        assert!(form.view().submitting);
        assert!(!form.view().can_submit());
        let second = form.submit().await;
        gate.notify_one();
        second
    });

    first.unwrap();
    assert!(matches!(second, Err(Error::SubmissionPending)));
    assert_eq!(sender.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_field_is_refused() {
    let sender = Arc::new(ScriptedSender::new(Step::Ok(())));
    let (form, center) = filled(sender.clone());
    form.set(Field::Email, "   ");

    assert!(matches!(form.submit().await, Err(Error::IncompleteForm)));
    assert!(sender.sent.lock().unwrap().is_empty());
    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_simulated_sender_takes_one_second() {
    let center = Arc::new(NotificationCenter::new());
    let form = ContactForm::new(Arc::new(SimulatedContactSender::new()), center.clone());
    form.fill(NewContact::new("Ann", "ann@example.test", "Hi"));

    let started = tokio::time::Instant::now();
    form.submit().await.unwrap();

    assert!(started.elapsed() >= SIMULATED_SEND_DELAY);
    assert_eq!(center.len(), 1);
}
