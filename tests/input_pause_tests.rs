mod common;

use std::time::{Duration, Instant};

use accessible_games::{Error, InputEvent, InputOutcome, Key, Modifiers, PauseOutcome};
use common::{fake_session, loaded_session};
use rstest::rstest;

const KEY_A: i32 = 97;
const KEY_RETURN: i32 = 13;
const KEY_SPACE: i32 = 32;
const KEY_LEFT_SHIFT: i32 = 0x400000E1;
const KEY_O_UMLAUT: i32 = 0xF6;
const KEY_KP_1: i32 = 0x40000059;
const KEY_AMPERSAND: i32 = 38;

#[test]
fn test_pause_waits_and_runs_callback() {
    let (mut session, backend) = loaded_session(1);
    let mut frames = 0;

    let start = Instant::now();
    let outcome = session
        .pause_with(Duration::from_millis(100), || frames += 1)
        .unwrap();

    assert_eq!(outcome, PauseOutcome::Elapsed);
    assert!(start.elapsed() >= Duration::from_millis(100));
    assert!(frames >= 1);
    assert_eq!(backend.presents(), frames);
}

#[test]
fn test_pause_zero_returns_immediately() {
    let (mut session, backend) = loaded_session(1);
    let mut called = false;

    let outcome = session.pause_with(Duration::ZERO, || called = true).unwrap();
    assert_eq!(outcome, PauseOutcome::Elapsed);
    assert!(!called);
    assert_eq!(backend.presents(), 0);
}

#[test]
fn test_pause_drains_other_events() {
    let (mut session, backend) = loaded_session(1);
    backend.push_event(InputEvent::Other);
    backend.push_key(KEY_A);

    let outcome = session.pause(Duration::from_millis(20)).unwrap();
    assert_eq!(outcome, PauseOutcome::Elapsed);
    assert!(backend.shared.borrow().events.is_empty());
}

#[test]
fn test_quit_during_pause_is_reported() {
    let (mut session, backend) = loaded_session(1);
    backend.push_event(InputEvent::Quit);

    let start = Instant::now();
    let outcome = session.pause(Duration::from_secs(10)).unwrap();

    assert_eq!(outcome, PauseOutcome::QuitRequested);
    assert!(start.elapsed() < Duration::from_secs(5));
    // Tearing down is left to the caller
    assert!(session.is_initialized());
}

#[test]
fn test_pause_requires_load() {
    let (mut session, _backend) = fake_session();
    assert!(matches!(
        session.pause(Duration::from_millis(10)),
        Err(Error::NotInitialized)
    ));
}

#[test]
fn test_input_requires_load() {
    let (mut session, _backend) = fake_session();
    assert!(matches!(session.input(), Err(Error::NotInitialized)));
}

#[rstest]
#[case(KEY_A, Modifiers::default(), "a")]
#[case(KEY_A, Modifiers { shift: true, ..Modifiers::default() }, "A")]
#[case(KEY_A, Modifiers { caps_lock: true, ..Modifiers::default() }, "A")]
#[case(KEY_A, Modifiers { shift: true, caps_lock: true, num_lock: false }, "a")]
#[case(KEY_RETURN, Modifiers::default(), "return")]
#[case(KEY_SPACE, Modifiers::default(), "space")]
#[case(KEY_LEFT_SHIFT, Modifiers { shift: true, ..Modifiers::default() }, "left shift")]
#[case(49, Modifiers { shift: true, ..Modifiers::default() }, "!")]
#[case(KEY_O_UMLAUT, Modifiers::default(), "ö")]
#[case(KEY_O_UMLAUT, Modifiers { shift: true, ..Modifiers::default() }, "Ö")]
#[case(KEY_KP_1, Modifiers::default(), "[1]")]
#[case(KEY_KP_1, Modifiers { num_lock: true, ..Modifiers::default() }, "1")]
fn test_input_returns_key_text(
    #[case] code: i32,
    #[case] modifiers: Modifiers,
    #[case] expected: &str,
) {
    let (mut session, backend) = loaded_session(1);
    backend.push_event(InputEvent::KeyDown(Key::new(code, modifiers)));

    let outcome = session.input().unwrap();
    assert_eq!(outcome, InputOutcome::Key(expected.to_string()));
}

#[test]
fn test_input_prefers_platform_text() {
    let (mut session, backend) = loaded_session(1);
    // AZERTY: shift on the '&' key types '1'
    let shifted = Modifiers {
        shift: true,
        ..Modifiers::default()
    };
    backend.push_event(InputEvent::KeyDown(
        Key::new(KEY_AMPERSAND, shifted).with_text("1"),
    ));
    backend.push_event(InputEvent::KeyDown(Key::plain(KEY_O_UMLAUT).with_text("ö")));
    backend.push_event(InputEvent::KeyDown(Key::plain(KEY_SPACE).with_text(" ")));

    assert_eq!(session.input().unwrap().key(), Some("1"));
    assert_eq!(session.input().unwrap().key(), Some("ö"));
    assert_eq!(session.input().unwrap().key(), Some("space"));
}

#[test]
fn test_input_skips_other_events() {
    let (mut session, backend) = loaded_session(1);
    backend.push_event(InputEvent::Other);
    backend.push_event(InputEvent::Other);
    backend.push_key(KEY_A);
    backend.push_key(KEY_RETURN);

    assert_eq!(session.input().unwrap().key(), Some("a"));
    assert_eq!(session.input().unwrap().key(), Some("return"));
}

#[test]
fn test_quit_during_input() {
    let (mut session, backend) = loaded_session(1);
    backend.push_event(InputEvent::Quit);

    assert_eq!(session.input().unwrap(), InputOutcome::QuitRequested);
    assert!(session.is_initialized());
    session.exit().unwrap();
}
