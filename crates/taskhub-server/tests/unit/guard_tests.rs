//! Bearer header parsing tests

use taskhub_server::guards::bearer_token;

#[test]
fn test_bearer_token_extracts_token() {
    assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Some("abc.def.ghi"));
}

#[test]
fn test_bearer_scheme_is_case_insensitive() {
    assert_eq!(bearer_token(Some("bearer abc")), Some("abc"));
    assert_eq!(bearer_token(Some("BEARER abc")), Some("abc"));
}

#[test]
fn test_missing_or_malformed_header_yields_none() {
    assert_eq!(bearer_token(None), None);
    assert_eq!(bearer_token(Some("")), None);
    assert_eq!(bearer_token(Some("Bearer")), None);
    assert_eq!(bearer_token(Some("Bearer   ")), None);
    assert_eq!(bearer_token(Some("Basic dXNlcjpwYXNz")), None);
}
