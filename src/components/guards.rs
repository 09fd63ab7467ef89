//! Route Guards
//!
//! Wrap views that need a logged-in user or an admin.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::store::{store_is_admin, store_is_logged_in, use_app_store};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let store = use_app_store();
    view! {
        <Show
            when=move || store_is_logged_in(&store)
            fallback=|| view! {
                <div class="notice">
                    <p>"You need to be logged in to see this page."</p>
                    <A href="/login">"Log in"</A>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let store = use_app_store();
    view! {
        <Show
            when=move || store_is_admin(&store)
            fallback=|| view! {
                <div class="notice">
                    <p>"This area is restricted to administrators."</p>
                    <A href="/">"Back to the store"</A>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
