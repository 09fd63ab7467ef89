//! Account Page
//!
//! Profile details and the wishlist of the logged-in reader.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{spawn_load, BookCard, EmptyState, ErrorBanner, LoadState, RequireAuth, Spinner};
use crate::context::use_toasts;
use crate::error::ApiError;
use crate::models::{Book, Role};
use crate::store::{store_handle_error, store_logout, store_token, store_user, use_app_store};

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AccountDetails />
        </RequireAuth>
    }
}

#[component]
fn AccountDetails() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let (wishlist, set_wishlist) = signal(LoadState::<Vec<Book>>::Loading);

    Effect::new(move |_| {
        let token = store_token(&store);
        spawn_load(set_wishlist, async move {
            match token {
                Some(token) => api::list_wishlist(&token).await,
                None => Err(ApiError::Unauthorized("Please log in to continue.".to_string())),
            }
        });
    });

    let remove = move |id: String| {
        let Some(token) = store_token(&store) else { return };
        spawn_local(async move {
            match api::remove_from_wishlist(&token, &id).await {
                Ok(()) => {
                    let _ = set_wishlist.try_update(|state| {
                        if let LoadState::Ready(list) = state {
                            list.retain(|b| b.id != id);
                        }
                    });
                    toasts.success("Removed from wishlist");
                }
                Err(e) => {
                    store_handle_error(&store, &e);
                    toasts.api_error(&e);
                }
            }
        });
    };

    let logout = move |_| {
        store_logout(&store);
        toasts.info("You have been logged out");
        navigate("/", Default::default());
    };

    view! {
        <section class="account-page">
            <h1>"My account"</h1>
            {move || store_user(&store).map(|user| view! {
                <dl class="profile">
                    <dt>"Name"</dt>
                    <dd>{user.name}</dd>
                    <dt>"Email"</dt>
                    <dd>{user.email}</dd>
                    <dt>"Account type"</dt>
                    <dd>{match user.role { Role::Admin => "Administrator", Role::User => "Reader" }}</dd>
                </dl>
            })}
            <button class="logout-btn" on:click=logout>"Log out"</button>

            <h2>"Wishlist"</h2>
            {move || match wishlist.get() {
                LoadState::Loading => view! { <Spinner /> }.into_any(),
                LoadState::Failed(msg) => view! { <ErrorBanner message=msg /> }.into_any(),
                LoadState::Ready(books) if books.is_empty() => {
                    view! { <EmptyState message="Nothing saved yet." /> }.into_any()
                }
                LoadState::Ready(books) => view! {
                    <div class="book-grid wishlist-grid">
                        {books.into_iter().map(|book| {
                            let id = book.id.clone();
                            view! {
                                <div class="wishlist-entry">
                                    <BookCard book=book />
                                    <button class="wishlist-remove-btn" on:click=move |_| remove(id.clone())>
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
