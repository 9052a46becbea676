use super::*;

// =============================================================================
// User
// =============================================================================

#[test]
fn user_deserializes_from_sparse_body() {
    let user: User = serde_json::from_str(r#"{"id": 7, "email": "a@b.com", "username": "ab", "role": "staff"}"#).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.role, "staff");
    assert!(user.full_name.is_none());
    assert!(!user.is_active);
}

#[test]
fn display_name_prefers_full_name() {
    let user = User {
        username: "jdoe".into(),
        full_name: Some("Jane Doe".into()),
        ..User::default()
    };
    assert_eq!(user.display_name(), "Jane Doe");
}

#[test]
fn display_name_falls_back_to_username() {
    let user = User { username: "jdoe".into(), full_name: Some(String::new()), ..User::default() };
    assert_eq!(user.display_name(), "jdoe");
}

// =============================================================================
// Page / references
// =============================================================================

#[test]
fn empty_page_has_no_items() {
    let page: Page<NomId> = Page::empty();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn couleur_libelle_defaults_missing_fields() {
    let statut: CouleurLibelle = serde_json::from_str(r#"{"id": 3, "nom": "ouverte"}"#).unwrap();
    assert_eq!(statut.id, 3);
    assert_eq!(statut.couleur, "");
}

#[test]
fn choice_keeps_non_string_values() {
    let choice: Choice = serde_json::from_str(r#"{"value": 2, "label": "Relance"}"#).unwrap();
    assert_eq!(choice.value, serde_json::json!(2));
}

#[test]
fn login_tokens_round_trip() {
    let tokens: LoginTokens = serde_json::from_str(r#"{"access": "T1", "refresh": "T2"}"#).unwrap();
    assert_eq!(tokens.access, "T1");
    assert_eq!(tokens.refresh, "T2");
}
