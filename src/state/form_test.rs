use super::*;

use serde_json::json;

fn sample_form() -> FormState {
    FormState::from_pairs(&[("nom", json!("")), ("contenu", json!("")), ("saturation", json!(null))])
}

// =============================================================================
// set_field
// =============================================================================

#[test]
fn set_field_updates_value() {
    let mut form = sample_form();
    form.set_field("nom", json!("Prépa compétences"));
    assert_eq!(form.value("nom"), Some(&json!("Prépa compétences")));
}

#[test]
fn set_field_clears_only_that_fields_error() {
    let mut form = sample_form();
    form.set_errors(
        [("nom".to_owned(), "required".to_owned()), ("contenu".to_owned(), "too short".to_owned())]
            .into_iter()
            .collect(),
    );

    form.set_field("nom", json!("x"));

    assert!(form.error("nom").is_none());
    assert_eq!(form.error("contenu"), Some("too short"));
}

// =============================================================================
// set_all / reset
// =============================================================================

#[test]
fn set_all_replaces_values_and_keeps_errors() {
    let mut form = sample_form();
    form.set_errors([("nom".to_owned(), "required".to_owned())].into_iter().collect());
    form.set_all([("nom".to_owned(), json!("loaded"))].into_iter().collect());

    assert_eq!(form.value("nom"), Some(&json!("loaded")));
    assert!(form.value("contenu").is_none());
    assert_eq!(form.error("nom"), Some("required"));
}

#[test]
fn reset_restores_initial_snapshot_and_clears_errors() {
    let mut form = sample_form();
    form.set_field("nom", json!("edited"));
    form.set_errors([("contenu".to_owned(), "bad".to_owned())].into_iter().collect());

    form.reset();

    assert_eq!(form.value("nom"), Some(&json!("")));
    assert!(!form.has_errors());
}

// =============================================================================
// absorb
// =============================================================================

#[test]
fn absorb_captures_validation_fields() {
    let mut form = sample_form();
    let error = ApiError::Validation {
        fields: [("contenu".to_owned(), "required".to_owned())].into_iter().collect(),
    };

    assert!(form.absorb(&error));
    assert_eq!(form.error("contenu"), Some("required"));
}

#[test]
fn absorb_ignores_non_validation_errors() {
    let mut form = sample_form();
    assert!(!form.absorb(&ApiError::Forbidden));
    assert!(!form.has_errors());
}

// =============================================================================
// payload
// =============================================================================

#[test]
fn payload_is_a_json_object_of_current_values() {
    let mut form = sample_form();
    form.set_field("nom", json!("Atelier CV"));
    form.set_field("saturation", json!(80));

    assert_eq!(
        form.payload(),
        json!({"nom": "Atelier CV", "contenu": "", "saturation": 80})
    );
}
