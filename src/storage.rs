//! Browser Storage
//!
//! JSON round-tripping of the session and basket through `localStorage`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::basket::Basket;
use crate::config::{BASKET_KEY, SESSION_KEY};
use crate::error::{ApiError, ApiResult};
use crate::models::Session;

/// String key-value backend. `localStorage` in the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> ApiResult<()>;
    fn remove(&self, key: &str);
}

impl KeyValueStore for web_sys::Storage {
    fn get(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        self.set_item(key, value).map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        let _ = self.remove_item(key);
    }
}

fn local_storage() -> ApiResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| ApiError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|e| ApiError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| ApiError::Storage("localStorage unavailable".to_string()))
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Read a JSON value. A corrupt entry is removed and treated as absent.
pub fn load_from<T: DeserializeOwned>(backend: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = backend.get(key)?;
    match decode(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding corrupt '{}' entry: {}", key, e);
            backend.remove(key);
            None
        }
    }
}

pub fn save_to<T: Serialize>(backend: &impl KeyValueStore, key: &str, value: &T) -> ApiResult<()> {
    let json = serde_json::to_string(value).map_err(|e| ApiError::Storage(e.to_string()))?;
    backend.set(key, &json)
}

pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    load_from(&local_storage().ok()?, key)
}

pub fn save<T: Serialize>(key: &str, value: &T) -> ApiResult<()> {
    save_to(&local_storage()?, key, value)
}

pub fn remove(key: &str) {
    if let Ok(storage) = local_storage() {
        KeyValueStore::remove(&storage, key);
    }
}

pub fn load_session() -> Option<Session> {
    load(SESSION_KEY)
}

pub fn save_session(session: &Session) {
    if let Err(e) = save(SESSION_KEY, session) {
        log::error!("failed to persist session: {}", e);
    }
}

pub fn clear_session() {
    remove(SESSION_KEY);
}

pub fn load_basket() -> Basket {
    load(BASKET_KEY).unwrap_or_default()
}

pub fn save_basket(basket: &Basket) {
    if let Err(e) = save(BASKET_KEY, basket) {
        log::error!("failed to persist basket: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::models::{Role, User};

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> ApiResult<()> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    fn sample_session() -> Session {
        Session {
            token: "t".to_string(),
            user: User { id: "1".into(), name: "Ana".into(), email: "ana@x.io".into(), role: Role::User },
        }
    }

    #[test]
    fn test_corrupt_session_entry_is_removed() {
        let backend = MemoryStore::default();
        backend.set(SESSION_KEY, "{not json").unwrap();
        assert_eq!(load_from::<Session>(&backend, SESSION_KEY), None);
        assert_eq!(backend.get(SESSION_KEY), None);
    }

    #[test]
    fn test_saved_session_loads_back() {
        let backend = MemoryStore::default();
        save_to(&backend, SESSION_KEY, &sample_session()).unwrap();
        assert_eq!(load_from::<Session>(&backend, SESSION_KEY), Some(sample_session()));
        assert_eq!(load_from::<Basket>(&backend, BASKET_KEY), None);
    }

    #[test]
    fn test_decode_session() {
        let raw = r#"{"token":"abc","user":{"id":"1","name":"Ana","email":"ana@x.io","role":"admin"}}"#;
        let session: Session = decode(raw).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.role, Role::Admin);
    }

    #[test]
    fn test_decode_corrupt_session_fails() {
        assert!(decode::<Session>("{not json").is_err());
        assert!(decode::<Session>(r#"{"token":"abc"}"#).is_err());
    }

    #[test]
    fn test_session_json_is_stable() {
        let session = sample_session();
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(decode::<Session>(&json).unwrap(), session);
    }
}
