use super::*;

#[test]
fn session_record_omits_absent_optional_fields() {
    let record = SessionRecord {
        id: "1".to_owned(),
        name: "Test User".to_owned(),
        email: "test@neurucare.com".to_owned(),
        phone: None,
        provider: None,
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": "1", "name": "Test User", "email": "test@neurucare.com" })
    );
}

#[test]
fn session_record_reads_provider_tag() {
    let raw = r#"{"id":"kakao_123456","name":"Kakao User","email":"kakao@example.com","phone":"010-1234-5678","provider":"kakao"}"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.provider, Some(Provider::Kakao));
    assert_eq!(record.phone.as_deref(), Some("010-1234-5678"));
}

#[test]
fn session_record_tolerates_missing_phone_and_provider() {
    let raw = r#"{"id":"1","name":"A","email":"a@b.co"}"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert!(record.phone.is_none());
    assert!(record.provider.is_none());
}

#[test]
fn provider_tags_and_labels() {
    assert_eq!(Provider::Kakao.as_str(), "kakao");
    assert_eq!(Provider::Google.as_str(), "google");
    assert_eq!(Provider::Google.to_string(), "Google");
    assert_eq!(SocialIntent::Signup.as_str(), "signup");
}
