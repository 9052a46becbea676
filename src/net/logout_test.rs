use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// register / trigger
// =============================================================================

#[test]
fn trigger_invokes_registered_callback_once() {
    let hook = LogoutHook::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    hook.register(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    hook.trigger(LogoutReason::Expired);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn trigger_without_registration_is_a_no_op() {
    let hook = LogoutHook::new();
    hook.trigger(LogoutReason::Expired);
    assert!(!hook.is_registered());
}

#[test]
fn callback_receives_the_reason() {
    let hook = LogoutHook::new();
    let reason = Arc::new(Mutex::new(None));
    let seen = Arc::clone(&reason);
    hook.register(move |r| {
        *seen.lock().unwrap() = Some(r);
    });

    hook.trigger(LogoutReason::Manual);
    assert_eq!(*reason.lock().unwrap(), Some(LogoutReason::Manual));
}

#[test]
fn late_registration_replaces_earlier_one() {
    let hook = LogoutHook::new();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let count = Arc::clone(&first);
    hook.register(move |_| {
        count.fetch_add(1, Ordering::SeqCst);
    });
    let count = Arc::clone(&second);
    hook.register(move |_| {
        count.fetch_add(1, Ordering::SeqCst);
    });

    hook.trigger(LogoutReason::Expired);
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn cloned_handles_share_the_slot() {
    let hook = LogoutHook::new();
    let other = hook.clone();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    other.register(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    hook.trigger(LogoutReason::Expired);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(hook.is_registered());
}

// =============================================================================
// LogoutReason
// =============================================================================

#[test]
fn expired_notice_mentions_session() {
    assert_eq!(LogoutReason::Expired.notice(), "Session expired. Please sign in again.");
}

#[test]
fn manual_notice_is_signed_out() {
    assert_eq!(LogoutReason::Manual.notice(), "Signed out.");
}
