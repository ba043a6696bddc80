//! Unmounting mid-flight: late results must not touch state.

use folio_core::Category;
use folio_view::{
    ContactForm, Error, NotificationCenter, Phase, ProfileController, ProjectsController, Scope,
};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::common::{ScriptedProfile, ScriptedProjects, ScriptedSender, Step, profile_with_count};

#[tokio::test]
async fn test_profile_result_after_unmount_is_discarded() {
    let gate = Arc::new(Notify::new());
    let step = Step::Gated(gate.clone(), profile_with_count(5));
    let source = Arc::new(ScriptedProfile::new(step));
    let center = Arc::new(NotificationCenter::new());
    let ctl = ProfileController::new(source, center.clone());

    tokio::join!(ctl.activate(), async {
        tokio::task::yield_now().await;
        ctl.unmount();
        gate.notify_one();
    });

    let view = ctl.view();
    assert_eq!(view.phase, Phase::Loading);
    assert!(view.profile.is_none());
    assert!(center.is_empty());
}

#[tokio::test]
async fn test_failure_after_unmount_is_not_notified() {
    let gate = Arc::new(Notify::new());
    let step = Step::Gated(gate.clone(), Vec::new());
    let source = Arc::new(ScriptedProjects::new().with(Category::Cv, step));
    let center = Arc::new(NotificationCenter::new());
    let ctl = ProjectsController::new(source.clone(), center.clone());

    tokio::join!(ctl.activate(), async {
        tokio::task::yield_now().await;
        ctl.unmount();
        source.set(Category::Social, Step::Fail(500, "late"));
    });

    assert!(ctl.view().phase.is_loading());
    assert!(center.is_empty());
}

#[tokio::test]
async fn test_operations_after_unmount_are_noops() {
    let source = Arc::new(ScriptedProfile::new(Step::Ok(profile_with_count(5))));
    let center = Arc::new(NotificationCenter::new());
    let ctl = ProfileController::new(source.clone(), center.clone());
    ctl.activate().await;
    ctl.unmount();

    let result = ctl.download_cv().await;
    assert!(matches!(result, Err(Error::Unmounted("about"))));
    assert_eq!(ctl.view().profile.unwrap().cv_download_count, 5);

    source.set_get(Step::Ok(profile_with_count(99)));
    ctl.activate().await;
    assert_eq!(ctl.view().profile.unwrap().cv_download_count, 5);
}

#[tokio::test]
async fn test_page_scope_cancels_every_section() {
    let page = Scope::new();
    let gate = Arc::new(Notify::new());
    let center = Arc::new(NotificationCenter::new());

    let sender = Arc::new(ScriptedSender::new(Step::Gated(gate.clone(), ())));
    let form = ContactForm::new(sender, center.clone()).in_scope(page.child());
    form.fill(folio_core::NewContact::new("Ann", "ann@example.test", "Hi"));

    let (result, ()) = tokio::join!(form.submit(), async {
        tokio::task::yield_now().await;
        page.cancel();
    });

    assert!(matches!(result, Err(Error::Unmounted("contact"))));
    assert_eq!(form.view().draft.name, "Ann");
    assert!(center.is_empty());
}
