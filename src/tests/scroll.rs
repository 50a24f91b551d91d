use super::{swing, ScrollAnimator, ScrollSession, Speed};
use crate::error::ConfigError;
use crate::heading::HeadingId;
use std::time::{Duration, Instant};

#[test]
fn test_session_ends_only_for_newest_generation() {
    let mut session = ScrollSession::default();
    let first = session.begin();
    let second = session.begin();

    assert!(!session.complete(first));
    assert!(session.is_active());
    assert!(session.complete(second));
    assert!(!session.is_active());
    assert!(!session.complete(second), "completion is reported once");
}

#[test]
fn test_swing_endpoints() {
    assert!(swing(0.0).abs() < 1e-12);
    assert!((swing(0.5) - 0.5).abs() < 1e-12);
    assert!((swing(1.0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_speed_parsing() {
    assert_eq!("fast".parse::<Speed>(), Ok(Speed::Fast));
    assert_eq!(" Slow ".parse::<Speed>(), Ok(Speed::Slow));
    assert_eq!(
        "warp".parse::<Speed>(),
        Err(ConfigError::UnknownValue {
            setting: "scroll_speed",
            value: "warp".to_string(),
        })
    );
    assert_eq!(Speed::Fast.duration(), Duration::from_millis(200));
}

#[test]
fn test_idle_animator_produces_no_frames() {
    let mut animator = ScrollAnimator::new(Speed::Fast);
    assert_eq!(animator.tick(Instant::now()), None);
    assert!(!animator.is_scrolling());
}

#[test]
fn test_animation_interpolates_then_completes_once() {
    let mut animator = ScrollAnimator::new(Speed::Fast);
    let start = Instant::now();
    animator.start(0.0, 400.0, HeadingId(3), start);
    assert!(animator.is_scrolling());

    let mid = animator.tick(start + Duration::from_millis(100)).unwrap();
    assert!(mid.position > 0.0 && mid.position < 400.0);
    assert_eq!(mid.completed, None);
    assert!(animator.is_scrolling());

    let end = animator.tick(start + Duration::from_millis(200)).unwrap();
    assert!((end.position - 400.0).abs() < f64::EPSILON);
    assert_eq!(end.completed, Some(HeadingId(3)));
    assert!(!animator.is_scrolling());

    assert_eq!(animator.tick(start + Duration::from_millis(300)), None);
}

#[test]
fn test_new_animation_replaces_running_one() {
    let mut animator = ScrollAnimator::new(Speed::Fast);
    let start = Instant::now();
    animator.start(0.0, 400.0, HeadingId(1), start);
    animator.start(100.0, 50.0, HeadingId(2), start + Duration::from_millis(100));

    // The first animation would have finished here, but it was stopped.
    let frame = animator.tick(start + Duration::from_millis(250)).unwrap();
    assert_eq!(frame.completed, None);
    assert!(animator.is_scrolling());
    assert_eq!(animator.target(), Some(HeadingId(2)));

    let frame = animator.tick(start + Duration::from_millis(300)).unwrap();
    assert_eq!(frame.completed, Some(HeadingId(2)));
    assert!(!animator.is_scrolling());
    assert_eq!(animator.session().generation(), 2);
}

#[test]
fn test_stop_ends_session_without_completion() {
    let mut animator = ScrollAnimator::new(Speed::Slow);
    let start = Instant::now();
    animator.start(0.0, 100.0, HeadingId(0), start);
    animator.stop();

    assert!(!animator.is_scrolling());
    assert_eq!(animator.tick(start + Duration::from_secs(1)), None);
}
