//! Global Application State Store
//!
//! The DataProvider: current session and basket, shared by every page.
//! Uses Leptos reactive_stores for fine-grained reactivity; every
//! mutation also writes through to local storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::basket::Basket;
use crate::error::ApiError;
use crate::models::{BasketItem, Session, User};
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user and bearer token
    pub session: Option<Session>,
    /// Shopping basket
    pub basket: Basket,
}

impl AppState {
    /// Restore state persisted by a previous visit
    pub fn restore() -> Self {
        let session = storage::load_session();
        if let Some(s) = &session {
            log::info!("restored session for {}", s.user.email);
        }
        Self {
            session,
            basket: storage::load_basket(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Session
// ========================

pub fn store_login(store: &AppStore, session: Session) {
    storage::save_session(&session);
    store.session().set(Some(session));
}

pub fn store_logout(store: &AppStore) {
    storage::clear_session();
    store.session().set(None);
    log::info!("logged out");
}

/// Bearer token, read without tracking (for event handlers)
pub fn store_token(store: &AppStore) -> Option<String> {
    store.session().with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
}

/// Current user (tracked)
pub fn store_user(store: &AppStore) -> Option<User> {
    store.session().with(|s| s.as_ref().map(|s| s.user.clone()))
}

pub fn store_is_logged_in(store: &AppStore) -> bool {
    store.session().with(Option::is_some)
}

pub fn store_is_admin(store: &AppStore) -> bool {
    store.session().with(|s| s.as_ref().is_some_and(|s| s.user.is_admin()))
}

/// A 401 invalidates whatever session the request was made with
pub fn session_rejected(session: Option<&Session>, err: &ApiError) -> bool {
    session.is_some() && err.is_unauthorized()
}

/// Drop the session when the API says the token is no longer valid
pub fn store_handle_error(store: &AppStore, err: &ApiError) {
    if store.session().with_untracked(|s| session_rejected(s.as_ref(), err)) {
        log::warn!("token rejected, clearing session");
        store_logout(store);
    }
}

// ========================
// Basket
// ========================

fn persist_basket(store: &AppStore) {
    store.basket().with_untracked(storage::save_basket);
}

pub fn store_add_to_basket(store: &AppStore, item: BasketItem) {
    log::debug!("basket add {} x{}", item.id, item.quantity);
    store.basket().write().add(item);
    persist_basket(store);
}

pub fn store_increment(store: &AppStore, id: &str) {
    store.basket().write().increment(id);
    persist_basket(store);
}

pub fn store_decrement(store: &AppStore, id: &str) {
    store.basket().write().decrement(id);
    persist_basket(store);
}

pub fn store_remove_from_basket(store: &AppStore, id: &str) {
    store.basket().write().remove(id);
    persist_basket(store);
}

pub fn store_clear_basket(store: &AppStore) {
    store.basket().write().clear();
    persist_basket(store);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn session() -> Session {
        Session {
            token: "t".to_string(),
            user: User { id: "1".into(), name: "Ana".into(), email: "ana@x.io".into(), role: Role::User },
        }
    }

    #[test]
    fn test_unauthorized_rejects_session() {
        let err = ApiError::from_status(401, "");
        assert!(session_rejected(Some(&session()), &err));
    }

    #[test]
    fn test_other_errors_keep_session() {
        let s = session();
        assert!(!session_rejected(Some(&s), &ApiError::from_status(403, "")));
        assert!(!session_rejected(Some(&s), &ApiError::from_status(500, r#"{"message":"boom"}"#)));
        assert!(!session_rejected(None, &ApiError::from_status(401, "")));
    }
}
