use super::*;

fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

// =============================================================================
// is_auth
// =============================================================================

#[test]
fn is_auth_true_only_for_auth() {
    assert!(ApiError::Auth.is_auth());
    assert!(!ApiError::Forbidden.is_auth());
    assert!(!ApiError::Http { status: 500, message: "boom".into() }.is_auth());
}

// =============================================================================
// validation_fields
// =============================================================================

#[test]
fn validation_fields_exposes_map() {
    let err = ApiError::Validation { fields: fields(&[("email", "invalid")]) };
    let map = err.validation_fields().unwrap();
    assert_eq!(map.get("email").map(String::as_str), Some("invalid"));
}

#[test]
fn validation_fields_none_for_other_variants() {
    assert!(ApiError::Forbidden.validation_fields().is_none());
}

// =============================================================================
// user_message
// =============================================================================

#[test]
fn user_message_auth_mentions_session() {
    assert_eq!(ApiError::Auth.user_message(), "Session expired. Please sign in again.");
}

#[test]
fn user_message_validation_picks_first_field() {
    let err = ApiError::Validation { fields: fields(&[("contenu", "required"), ("nom", "too long")]) };
    assert_eq!(err.user_message(), "contenu: required");
}

#[test]
fn user_message_http_passes_server_text_through() {
    let err = ApiError::Http { status: 502, message: "upstream unavailable".into() };
    assert_eq!(err.user_message(), "upstream unavailable");
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Http { status: 500, message: "boom".into() };
    assert_eq!(err.to_string(), "server returned HTTP 500: boom");
}
