use super::*;

use serde_json::json;

#[test]
fn detail_path_formats_expected_url() {
    assert_eq!(detail_path(7), "/commentaires/7/");
}

#[test]
fn normalize_list_unwraps_item_envelopes() {
    let raw = Page {
        items: vec![
            json!({"success": true, "message": "ok", "data": {"id": 1, "contenu": "premier"}}),
            json!({"success": true, "message": "ok", "data": {"id": 2, "contenu": "second"}}),
        ],
        total: 2,
    };
    let page = normalize_list(raw).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].contenu, "premier");
    assert_eq!(page.total, 2);
}

#[test]
fn normalize_list_accepts_plain_items_too() {
    let raw = Page { items: vec![json!({"id": 4, "contenu": "direct"})], total: 1 };
    let page = normalize_list(raw).unwrap();
    assert_eq!(page.items[0].id, 4);
}

#[test]
fn payload_omits_absent_saturation() {
    let payload = CommentairePayload { formation: 3, contenu: "ras".into(), saturation: None };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"formation": 3, "contenu": "ras"})
    );
}

#[test]
fn export_row_matches_headers_width() {
    let commentaire = Commentaire {
        id: 1,
        formation_nom: "Prépa".into(),
        auteur: "mlh".into(),
        contenu: "complet".into(),
        saturation: Some(80.0),
        ..Commentaire::default()
    };
    assert_eq!(commentaire.export_row().len(), EXPORT_HEADERS.len());
    assert_eq!(commentaire.export_row()[4], "80%");
}

#[test]
fn export_date_drops_empty_strings() {
    let commentaire = Commentaire { date: Some(String::new()), ..Commentaire::default() };
    assert!(commentaire.export_date().is_none());
}
