use super::*;
use crate::consts::SESSION_STORAGE_KEY;
use crate::net::backend::{DemoBackend, NoLatency};
use crate::util::storage::MemoryStorage;

#[tokio::test]
async fn every_button_signs_in_with_a_provider_tagged_tab_session() {
    for provider in [Provider::Kakao, Provider::Google] {
        for intent in [SocialIntent::Login, SocialIntent::Signup] {
            let storage = MemoryStorage::new();
            let mut store = SessionStore::new(storage.clone());

            let user = social_sign_in(&DemoBackend::new(NoLatency), &mut store, provider, intent)
                .await
                .unwrap();

            assert_eq!(user.provider, Some(provider));
            assert_eq!(store.current_user(), Some(&user));
            assert!(storage.contains(StorageScope::Tab, SESSION_STORAGE_KEY));
            assert!(!storage.contains(StorageScope::Persistent, SESSION_STORAGE_KEY));
        }
    }
}

#[tokio::test]
async fn social_sign_in_replaces_remembered_session() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    let backend = DemoBackend::new(NoLatency);
    crate::services::auth::login(&backend, &mut store, crate::consts::DEMO_EMAIL, crate::consts::DEMO_PASSWORD, true)
        .await
        .unwrap();

    social_sign_in(&backend, &mut store, Provider::Google, SocialIntent::Login)
        .await
        .unwrap();

    let reloaded = SessionStore::hydrate(storage);
    assert_eq!(reloaded.current_user().map(|u| u.id.as_str()), Some("google_123456"));
}

#[test]
fn button_ids_match_markup() {
    assert_eq!(button_id(Provider::Kakao, SocialIntent::Login), "kakao-login-btn");
    assert_eq!(button_id(Provider::Kakao, SocialIntent::Signup), "kakao-signup-btn");
    assert_eq!(button_id(Provider::Google, SocialIntent::Login), "google-login-btn");
    assert_eq!(button_id(Provider::Google, SocialIntent::Signup), "google-signup-btn");
}

#[test]
fn messages_name_provider_and_action() {
    assert_eq!(success_message(Provider::Kakao, SocialIntent::Login), "Signed in with Kakao!");
    assert_eq!(success_message(Provider::Google, SocialIntent::Signup), "Signed up with Google!");
    assert_eq!(failure_message(Provider::Google, SocialIntent::Login), "Google sign-in failed.");
    assert_eq!(button_label(Provider::Kakao, SocialIntent::Signup), "Sign up with Kakao");
}
