// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use constants::*;
use particles::ParticleParams;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(TRANSITION_DELAY_MS > 0);
    assert!(INITIAL_REVEAL_DELAY_MS > 0);
    // a toast outlives the section fade it may accompany
    assert!(TOAST_DURATION_MS > TRANSITION_DELAY_MS);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn selectors_and_ids_are_set() {
    assert!(!SECTION_ID_PREFIX.is_empty());
    assert!(INITIAL_REVEAL_SELECTOR.contains(&format!("#{SECTION_ID_PREFIX}{INITIAL_SECTION}")));
    assert!(NEWS_DATA_URL.ends_with(".json"));
    assert!(FORM_RELAY_ENDPOINT.starts_with("https://"));
}

#[test]
fn section_discovery_only_matches_section_elements() {
    assert!(SECTION_SELECTOR.starts_with("section["));
    assert!(SECTION_SELECTOR.contains(&format!(r#"[id^="{SECTION_ID_PREFIX}"]"#)));
}

#[test]
fn news_cards_are_observed_without_touching_the_rest_of_the_page() {
    assert_ne!(NEWS_CARD_SELECTOR, REVEAL_SELECTOR);
    assert!(NEWS_CARD_SELECTOR.starts_with(&format!("#{NEWS_FEED_MOUNT} ")));
    assert!(NEWS_CARD_SELECTOR.ends_with(REVEAL_SELECTOR));
}

#[test]
fn default_particle_params_are_sane() {
    let p = ParticleParams::default();
    assert_eq!(p.count, 100);
    assert!(p.friction > 0.0 && p.friction < 1.0);
    assert!(p.jitter > 0.0);
    assert!(p.connection_distance > p.mouse_radius);
    assert!(p.link_max_opacity > 0.0 && p.link_max_opacity <= 1.0);
    // pulse never needs clamping for the base range 0.3..0.8
    assert!(0.3 - p.pulse_amplitude >= 0.0);
    assert!(0.8 + p.pulse_amplitude <= 1.0 + f32::EPSILON);
}
