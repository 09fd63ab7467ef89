//! Layout Components
//!
//! Shared page chrome: header with navigation and basket badge, footer
//! with the static page links.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::use_toasts;
use crate::store::{store_is_admin, store_logout, store_user, use_app_store, AppStateStoreFields};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let basket_count = move || store.basket().with(|b| b.total_items());
    let user = move || store_user(&store);
    let is_admin = move || store_is_admin(&store);

    let logout = move |_| {
        store_logout(&store);
        toasts.info("You have been logged out");
        navigate("/", Default::default());
    };

    view! {
        <header class="site-header">
            <A href="/" attr:class="brand">"BookCompass"</A>
            <nav class="site-nav">
                <A href="/audiobooks">"Audiobooks"</A>
                <A href="/ebooks">"E-books"</A>
                <A href="/textbooks">"Textbooks"</A>
                <Show when=is_admin>
                    <A href="/admin" attr:class="admin-link">"Admin"</A>
                </Show>
            </nav>
            <div class="header-actions">
                <A href="/cart" attr:class="basket-link">
                    "Basket"
                    <Show when=move || { basket_count() > 0 }>
                        <span class="badge">{basket_count}</span>
                    </Show>
                </A>
                {move || match user() {
                    Some(u) => view! {
                        <A href="/account" attr:class="account-link">{u.name}</A>
                        <button class="logout-btn" on:click=logout.clone()>"Log out"</button>
                    }.into_any(),
                    None => view! {
                        <A href="/login">"Log in"</A>
                        <A href="/register" attr:class="register-link">"Sign up"</A>
                    }.into_any(),
                }}
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav>
                <A href="/faq">"FAQ"</A>
                <A href="/contact">"Contact"</A>
                <A href="/terms">"Terms"</A>
            </nav>
            <p class="copyright">"© BookCompass"</p>
        </footer>
    }
}
