use super::*;

use serde_json::json;

#[test]
fn detail_path_formats_expected_url() {
    assert_eq!(detail_path(18), "/formations/18/");
}

#[test]
fn nested_path_builds_collection_urls() {
    assert_eq!(nested_path(18, "commentaires"), "/formations/18/commentaires/");
    assert_eq!(nested_path(18, "historique"), "/formations/18/historique/");
}

#[test]
fn formation_deserializes_from_list_row() {
    let row: Formation = serde_json::from_value(json!({
        "id": 3,
        "nom": "Prépa compétences",
        "centre": {"id": 1, "nom": "Paris 12"},
        "statut": {"id": 2, "nom": "ouverte", "libelle": "Ouverte", "couleur": "#2ecc71"},
        "start_date": "2025-09-01",
        "saturation": 85.5,
        "places_restantes": 3
    }))
    .unwrap();
    assert_eq!(row.nom, "Prépa compétences");
    assert_eq!(row.centre.as_ref().map(|c| c.id), Some(1));
    assert_eq!(row.statut.as_ref().map(|s| s.couleur.as_str()), Some("#2ecc71"));
    assert_eq!(row.saturation, Some(85.5));
}

#[test]
fn formation_tolerates_null_relations() {
    let row: Formation = serde_json::from_value(json!({
        "id": 4,
        "nom": "POEI dev",
        "centre": null,
        "type_offre": null,
        "statut": null
    }))
    .unwrap();
    assert!(row.centre.is_none());
    assert!(row.type_offre.is_none());
}

#[test]
fn evenement_deserializes_with_defaults() {
    let ev: Evenement = serde_json::from_value(json!({
        "id": 7,
        "formation_id": 3,
        "type_evenement": "job_dating",
        "event_date": "2025-10-02"
    }))
    .unwrap();
    assert_eq!(ev.type_evenement, "job_dating");
    assert!(ev.lieu.is_none());
}
