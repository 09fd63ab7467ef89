//! Wishlist Button

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_toasts;
use crate::store::{store_handle_error, store_is_logged_in, store_token, use_app_store};

/// Toggles a book on the user's wishlist. Hidden when logged out.
///
/// The saved state comes from the server so a book saved in an earlier
/// visit toggles off instead of being posted twice.
#[component]
pub fn WishlistButton(#[prop(into)] book_id: String) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let (saved, set_saved) = signal(false);
    let (busy, set_busy) = signal(true);
    let book_id = StoredValue::new(book_id);

    Effect::new(move |_| {
        // Tracked so a login on this page refreshes the state
        if !store_is_logged_in(&store) {
            return;
        }
        let Some(token) = store_token(&store) else { return };
        let id = book_id.get_value();
        spawn_local(async move {
            match api::list_wishlist(&token).await {
                Ok(list) => {
                    let _ = set_saved.try_set(api::wishlist_contains(&list, &id));
                }
                Err(e) => {
                    log::warn!("could not load wishlist: {}", e);
                    store_handle_error(&store, &e);
                }
            }
            let _ = set_busy.try_set(false);
        });
    });

    let toggle = move |_| {
        let Some(token) = store_token(&store) else { return };
        let id = book_id.get_value();
        let was_saved = saved.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            let result = if was_saved {
                api::remove_from_wishlist(&token, &id).await
            } else {
                api::add_to_wishlist(&token, &id).await
            };
            match result {
                Ok(()) => {
                    let _ = set_saved.try_set(!was_saved);
                    toasts.success(if was_saved { "Removed from wishlist" } else { "Saved to wishlist" });
                }
                Err(e) => {
                    store_handle_error(&store, &e);
                    toasts.api_error(&e);
                }
            }
            let _ = set_busy.try_set(false);
        });
    };

    view! {
        <Show when=move || store_is_logged_in(&store)>
            <button
                class=move || { if saved.get() { "wishlist-btn saved" } else { "wishlist-btn" } }
                disabled=move || busy.get()
                on:click=toggle
            >
                {move || if saved.get() { "♥ Saved" } else { "♡ Wishlist" }}
            </button>
        </Show>
    }
}
