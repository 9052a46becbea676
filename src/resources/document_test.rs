use super::*;

#[test]
fn detail_path_formats_expected_url() {
    assert_eq!(detail_path(3), "/documents/3/");
}

#[test]
fn document_deserializes_from_sparse_row() {
    let doc: Document = serde_json::from_str(
        r#"{"id": 9, "nom_fichier": "convention.pdf", "type_document": "convention"}"#,
    )
    .unwrap();
    assert_eq!(doc.nom_fichier, "convention.pdf");
    assert!(doc.formation.is_none());
}

#[test]
fn payload_serializes_without_absent_formation() {
    let payload = DocumentPayload { nom_fichier: "a.pdf".into(), type_document: "autre".into(), formation: None };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({"nom_fichier": "a.pdf", "type_document": "autre"})
    );
}
