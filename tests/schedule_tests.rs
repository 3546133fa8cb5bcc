// Host-side tests for the frame-loop token and clock.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod schedule {
    include!("../src/core/schedule.rs");
}

use schedule::*;

#[test]
fn token_counts_frames_until_stopped() {
    let token = LoopToken::new();
    assert!(!token.is_stopped());
    for _ in 0..5 {
        assert!(token.tick());
    }
    assert_eq!(token.frames(), 5);

    token.stop();
    assert!(token.is_stopped());
    assert!(!token.tick());
    assert_eq!(token.frames(), 5);
}

#[test]
fn clones_share_the_stop_flag() {
    let token = LoopToken::new();
    let in_loop = token.clone();
    assert!(in_loop.tick());
    token.stop();
    assert!(!in_loop.tick());
    assert_eq!(token.frames(), 1);
}

#[test]
fn stopping_twice_is_harmless() {
    let token = LoopToken::new();
    token.stop();
    token.stop();
    assert!(token.is_stopped());
}

#[test]
fn clock_moves_forward() {
    let clock = FrameClock::new();
    let a = clock.elapsed_sec();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let b = clock.elapsed_sec();
    assert!(a >= 0.0);
    assert!(b > a);
}
