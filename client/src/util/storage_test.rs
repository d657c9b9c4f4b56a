#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_token_is_none_in_non_hydrate_tests() {
    assert!(load_token().is_none());
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    save_token("a.b.c");
    clear_token();
    assert!(load_token().is_none());
}

#[test]
fn token_key_matches_login_form() {
    assert_eq!(TOKEN_KEY, "jwtToken");
}
