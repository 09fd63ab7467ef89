//! Load State
//!
//! The loading/error/ready lifecycle every page goes through, plus the
//! small views that render each state.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::ApiResult;
use crate::store::{store_handle_error, AppStore};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(v) => Some(v),
            _ => None,
        }
    }
}

/// Run a request and publish its outcome into `set_state`.
///
/// The write is skipped if the page was disposed before the response came
/// back. A 401 also clears the session.
pub fn spawn_load<T, Fut>(set_state: WriteSignal<LoadState<T>>, fut: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let store = use_context::<AppStore>();
    let _ = set_state.try_set(LoadState::Loading);
    spawn_local(async move {
        let next = match fut.await {
            Ok(value) => LoadState::Ready(value),
            Err(e) => {
                if let Some(store) = &store {
                    store_handle_error(store, &e);
                }
                LoadState::Failed(e.user_message())
            }
        };
        let _ = set_state.try_set(next);
    });
}

#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="spinner" role="status">
            <span class="spinner-dot"></span>
            <span class="spinner-label">{label.unwrap_or_else(|| "Loading...".to_string())}</span>
        </div>
    }
}

#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="error-banner" role="alert">{message}</div> }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="empty-state">{message}</div> }
}
