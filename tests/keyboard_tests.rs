// Host-side tests for keyboard activation and in-page link parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::{anchor_target, is_activation_key};

#[test]
fn enter_and_space_activate() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(is_activation_key("Spacebar"));
}

#[test]
fn other_keys_do_not_activate() {
    for key in ["Tab", "Escape", "a", "ArrowDown", "enter", ""] {
        assert!(!is_activation_key(key), "{key:?}");
    }
}

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#features"), Some("features"));
    assert_eq!(anchor_target("#hero"), Some("hero"));
}

#[test]
fn bare_hash_and_external_links_have_no_target() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("https://example.com/#x"), None);
}
