//! Profile controller: activation and CV downloads.

use folio_view::notify::Level;
use folio_view::{Error, NotificationCenter, Phase, ProfileController};
use std::sync::Arc;
use std::sync::atomic::Ordering;

use crate::common::{ScriptedProfile, Step, profile_with_count};

fn controller(source: Arc<ScriptedProfile>) -> (ProfileController, Arc<NotificationCenter>) {
    let center = Arc::new(NotificationCenter::new());
    (ProfileController::new(source, center.clone()), center)
}

#[tokio::test]
async fn test_activate_loads_profile() {
    let source = Arc::new(ScriptedProfile::new(Step::Ok(profile_with_count(5))));
    let (ctl, center) = controller(source);
    assert_eq!(ctl.view().phase, Phase::Idle);

    ctl.activate().await;

    let view = ctl.view();
    assert_eq!(view.phase, Phase::Ready);
    assert_eq!(view.profile.unwrap().cv_download_count, 5);
    assert!(center.is_empty());
}

#[tokio::test]
async fn test_activate_failure_notifies() {
    let source = Arc::new(ScriptedProfile::new(Step::Fail(500, "Internal error")));
    let (ctl, center) = controller(source);

    ctl.activate().await;

    let view = ctl.view();
    assert_eq!(view.phase, Phase::Failed("Internal error".to_string()));
    assert!(view.profile.is_none());
    let notes = center.drain();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, Level::Error);
    assert_eq!(notes[0].message, "Failed to load profile.");
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_profile() {
    let source = Arc::new(ScriptedProfile::new(Step::Ok(profile_with_count(5))));
    let (ctl, _center) = controller(source.clone());
    ctl.activate().await;

    source.set_get(Step::Fail(503, "Service Unavailable"));
    ctl.activate().await;

    let view = ctl.view();
    assert!(view.phase.is_failed());
    assert_eq!(view.profile, Some(profile_with_count(5)));
}

#[tokio::test]
async fn test_download_cv_increments_by_one() {
    let source = Arc::new(ScriptedProfile::new(Step::Ok(profile_with_count(5))));
    let (ctl, center) = controller(source.clone());
    ctl.activate().await;

    let count = ctl.download_cv().await.unwrap();

    assert_eq!(count, 6);
    assert_eq!(ctl.view().profile, Some(profile_with_count(6)));
    assert_eq!(source.increments.load(Ordering::SeqCst), 1);
    assert!(center.is_empty());
}

#[tokio::test]
async fn test_download_cv_failure_keeps_counter() {
    let source = Arc::new(ScriptedProfile::new(Step::Ok(profile_with_count(5))));
    let (ctl, center) = controller(source.clone());
    ctl.activate().await;
    source.set_increment(Step::Fail(500, "Service down"));

    let err = ctl.download_cv().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(ctl.view().profile.unwrap().cv_download_count, 5);
    let notes = center.drain();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].message, "CV download failed: Service down");
    assert_eq!(source.increments.load(Ordering::SeqCst), 1, "no retry");
}

#[tokio::test]
async fn test_download_cv_requires_ready() {
    let source = Arc::new(ScriptedProfile::new(Step::Ok(profile_with_count(5))));
    let (ctl, _center) = controller(source.clone());

    let err = ctl.download_cv().await.unwrap_err();

    assert!(matches!(
        err,
        Error::NotReady {
            section: "about",
            phase: Phase::Idle
        }
    ));
    assert_eq!(source.increments.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_concurrent_downloads_each_count_once() {
    let source = Arc::new(ScriptedProfile::new(Step::Ok(profile_with_count(5))));
    let (ctl, _center) = controller(source.clone());
    ctl.activate().await;

    let (a, b) = tokio::join!(ctl.download_cv(), ctl.download_cv());

    assert!(a.is_ok() && b.is_ok());
    assert_eq!(ctl.view().profile.unwrap().cv_download_count, 7);
    assert_eq!(source.increments.load(Ordering::SeqCst), 2);
}
