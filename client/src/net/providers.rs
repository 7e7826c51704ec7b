//! Third-party identity providers (Kakao, Google).
//!
//! SYSTEM CONTEXT
//! ==============
//! The social buttons currently go through `DemoBackend::social`. This module
//! holds the browser SDK integration those buttons will switch to once real
//! app keys exist: the SDK calls themselves (browser only) and pure mappers
//! from provider payloads to a [`SessionRecord`].
//!
//! ERROR HANDLING
//! ==============
//! `authorize` rejects with a [`ProviderError`]; a missing SDK script is
//! `SdkUnavailable`. Outside the browser every provider is unavailable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "providers_test.rs"]
mod providers_test;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use super::types::{Provider, SessionRecord};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{0} SDK is not loaded.")]
    SdkUnavailable(Provider),
    #[error("{0} sign-in failed.")]
    Rejected(Provider),
    #[error("Could not fetch {0} user info.")]
    UserInfo(Provider),
    #[error("Could not read the {0} credential.")]
    Credential(Provider),
}

// =============================================================================
// PAYLOAD MAPPING
// =============================================================================

/// Response of Kakao's `/v2/user/me`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KakaoUserInfo {
    pub id: u64,
    #[serde(default)]
    pub kakao_account: Option<KakaoAccount>,
    #[serde(default)]
    pub properties: Option<KakaoProperties>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct KakaoAccount {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct KakaoProperties {
    #[serde(default)]
    pub nickname: Option<String>,
}

impl KakaoUserInfo {
    /// Kakao may withhold email and nickname; missing values become empty.
    #[must_use]
    pub fn into_record(self) -> SessionRecord {
        SessionRecord {
            id: self.id.to_string(),
            name: self.properties.and_then(|p| p.nickname).unwrap_or_default(),
            email: self.kakao_account.and_then(|a| a.email).unwrap_or_default(),
            phone: None,
            provider: Some(Provider::Kakao),
        }
    }
}

/// Claims read from a Google Identity Services ID token.
#[derive(Clone, Debug, Deserialize)]
pub struct GoogleIdClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl GoogleIdClaims {
    #[must_use]
    pub fn into_record(self) -> SessionRecord {
        SessionRecord {
            id: self.sub,
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: None,
            provider: Some(Provider::Google),
        }
    }
}

/// Decode the payload segment of a Google ID token (JWT) into a record.
///
/// The signature is not checked; the token only seeds the local session.
///
/// # Errors
///
/// Returns [`ProviderError::Credential`] if the token has no payload segment,
/// the segment is not base64url, or the JSON lacks a `sub` claim.
pub fn decode_google_credential(credential: &str) -> Result<SessionRecord, ProviderError> {
    let bad = || ProviderError::Credential(Provider::Google);
    let payload = credential.split('.').nth(1).filter(|p| !p.is_empty()).ok_or_else(bad)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| bad())?;
    let claims: GoogleIdClaims = serde_json::from_slice(&bytes).map_err(|_| bad())?;
    Ok(claims.into_record())
}

// =============================================================================
// PROVIDERS
// =============================================================================

/// A provider SDK that can sign the user in.
#[async_trait(?Send)]
pub trait IdentityProvider {
    fn provider(&self) -> Provider;

    /// Run the provider's sign-in flow and return the signed-in user.
    async fn authorize(&self) -> Result<SessionRecord, ProviderError>;

    /// Revoke the link between the site and the provider account.
    async fn disconnect(&self);
}

/// Kakao JavaScript SDK (`window.Kakao`).
#[derive(Clone, Debug)]
pub struct KakaoSdk {
    pub app_key: String,
}

/// Google Identity Services (`window.google.accounts.id`).
#[derive(Clone, Debug)]
pub struct GoogleSdk {
    pub client_id: String,
}

#[async_trait(?Send)]
impl IdentityProvider for KakaoSdk {
    fn provider(&self) -> Provider {
        Provider::Kakao
    }

    async fn authorize(&self) -> Result<SessionRecord, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let kakao = sdk::global("Kakao").ok_or(ProviderError::SdkUnavailable(Provider::Kakao))?;
            let initialized = sdk::call(&kakao, &["isInitialized"], &[])
                .ok()
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            if !initialized {
                let _ = sdk::call(&kakao, &["init"], &[self.app_key.as_str().into()]);
            }
            sdk::call_with_callbacks(&kakao, &["Auth", "login"], &[])
                .await
                .map_err(|_| ProviderError::Rejected(Provider::Kakao))?;
            let info = sdk::call_with_callbacks(&kakao, &["API", "request"], &[("url", "/v2/user/me")])
                .await
                .map_err(|_| ProviderError::UserInfo(Provider::Kakao))?;
            let info: KakaoUserInfo = sdk::to_serde(&info).ok_or(ProviderError::UserInfo(Provider::Kakao))?;
            Ok(info.into_record())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ProviderError::SdkUnavailable(Provider::Kakao))
        }
    }

    async fn disconnect(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(kakao) = sdk::global("Kakao") else {
                return;
            };
            match sdk::call_with_callbacks(&kakao, &["API", "request"], &[("url", "/v1/user/unlink")]).await {
                Ok(_) => log::info!("kakao account unlinked"),
                Err(e) => log::error!("kakao unlink failed: {e:?}"),
            }
        }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for GoogleSdk {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    async fn authorize(&self) -> Result<SessionRecord, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsValue;

            let google = sdk::global("google").ok_or(ProviderError::SdkUnavailable(Provider::Google))?;
            let id_api = sdk::path(&google, &["accounts", "id"]).ok_or(ProviderError::SdkUnavailable(Provider::Google))?;

            let mut started = Ok(JsValue::UNDEFINED);
            let promise = js_sys::Promise::new(&mut |resolve, _reject| {
                let options = js_sys::Object::new();
                let _ = js_sys::Reflect::set(&options, &"client_id".into(), &self.client_id.as_str().into());
                let _ = js_sys::Reflect::set(&options, &"callback".into(), &resolve);
                started = sdk::call(&id_api, &["initialize"], &[options.into()])
                    .and_then(|_| sdk::call(&id_api, &["prompt"], &[]));
            });
            started.map_err(|_| ProviderError::Rejected(Provider::Google))?;

            let response = wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map_err(|_| ProviderError::Rejected(Provider::Google))?;
            let credential = js_sys::Reflect::get(&response, &"credential".into())
                .ok()
                .and_then(|v| v.as_string())
                .ok_or(ProviderError::Credential(Provider::Google))?;
            decode_google_credential(&credential)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ProviderError::SdkUnavailable(Provider::Google))
        }
    }

    async fn disconnect(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(google) = sdk::global("google") else {
                return;
            };
            if let Some(id_api) = sdk::path(&google, &["accounts", "id"]) {
                let _ = sdk::call(&id_api, &["disableAutoSelect"], &[]);
                log::info!("google auto-select disabled");
            }
        }
    }
}

// =============================================================================
// JS INTEROP
// =============================================================================

#[cfg(feature = "hydrate")]
mod sdk {
    use js_sys::{Array, Function, Object, Promise, Reflect};
    use serde::de::DeserializeOwned;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    /// `window[name]`, if the SDK script defined it.
    pub fn global(name: &str) -> Option<JsValue> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
        (!value.is_undefined() && !value.is_null()).then_some(value)
    }

    /// Follow `keys` from `root` (`["accounts", "id"]` → `root.accounts.id`).
    pub fn path(root: &JsValue, keys: &[&str]) -> Option<JsValue> {
        let mut current = root.clone();
        for key in keys {
            current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
            if current.is_undefined() || current.is_null() {
                return None;
            }
        }
        Some(current)
    }

    /// Call the method at `keys` with its owner as `this`.
    pub fn call(root: &JsValue, keys: &[&str], args: &[JsValue]) -> Result<JsValue, JsValue> {
        let missing = || JsValue::from_str("sdk method missing");
        let (method, owner_keys) = keys.split_last().ok_or_else(missing)?;
        let owner = path(root, owner_keys).ok_or_else(missing)?;
        let func = Reflect::get(&owner, &JsValue::from_str(method))?
            .dyn_into::<Function>()
            .map_err(|_| missing())?;
        func.apply(&owner, &args.iter().collect::<Array>())
    }

    /// Call an SDK method taking `{ ...fields, success, fail }` and await
    /// whichever callback fires.
    pub async fn call_with_callbacks(root: &JsValue, keys: &[&str], fields: &[(&str, &str)]) -> Result<JsValue, JsValue> {
        let options = Object::new();
        for (key, value) in fields {
            Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value))?;
        }
        let mut started = Ok(JsValue::UNDEFINED);
        let promise = Promise::new(&mut |resolve, reject| {
            let _ = Reflect::set(&options, &"success".into(), &resolve);
            let _ = Reflect::set(&options, &"fail".into(), &reject);
            started = call(root, keys, &[options.clone().into()]);
        });
        started?;
        JsFuture::from(promise).await
    }

    /// Convert a plain JS object into a Rust value through JSON.
    pub fn to_serde<T: DeserializeOwned>(value: &JsValue) -> Option<T> {
        let json = js_sys::JSON::stringify(value).ok()?.as_string()?;
        serde_json::from_str(&json).ok()
    }
}
