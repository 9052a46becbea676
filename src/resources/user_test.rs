use super::*;

#[test]
fn detail_path_formats_expected_url() {
    assert_eq!(detail_path(12), "/users/12/");
}

#[test]
fn registration_payload_omits_absent_names() {
    let payload = RegistrationPayload {
        email: "a@b.com".into(),
        username: "ab".into(),
        password: "x".into(),
        first_name: None,
        last_name: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value, serde_json::json!({"email": "a@b.com", "username": "ab", "password": "x"}));
}

#[test]
fn user_implements_has_id() {
    let user = User { id: 41, ..User::default() };
    assert_eq!(HasId::id(&user), 41);
}
