use super::*;

#[test]
fn detail_path_formats_expected_url() {
    assert_eq!(detail_path(31), "/prospections/31/");
}

#[test]
fn changer_statut_path_is_nested_action() {
    assert_eq!(changer_statut_path(31), "/prospections/31/changer-statut/");
}

#[test]
fn changer_statut_payload_omits_absent_fields() {
    let payload = ChangerStatutPayload { statut: "a_relancer".into(), commentaire: None, prochain_contact: None };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({"statut": "a_relancer"})
    );
}

#[test]
fn prospection_deserializes_from_list_row() {
    let row: Prospection = serde_json::from_str(
        r#"{"id": 5, "partenaire": 2, "partenaire_nom": "AFPA", "statut": "en_cours", "statut_display": "En cours"}"#,
    )
    .unwrap();
    assert_eq!(row.id, 5);
    assert_eq!(row.statut.as_deref(), Some("en_cours"));
    assert!(row.formation.is_none());
}
