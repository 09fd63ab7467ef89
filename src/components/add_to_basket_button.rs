//! Add To Basket Button

use leptos::prelude::*;

use crate::context::use_toasts;
use crate::models::{BasketItem, Book};
use crate::store::{store_add_to_basket, use_app_store, AppStateStoreFields};

#[component]
pub fn AddToBasketButton(book: Book, #[prop(optional)] compact: bool) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let digital = book.kind().is_digital();
    let available = book.in_stock();

    // Digital books can only be bought once
    let id = book.id.clone();
    let already_owned = Memo::new(move |_| digital && store.basket().with(|b| b.contains(&id)));

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        store_add_to_basket(&store, BasketItem::from_book(&book, 1));
        toasts.success(format!("Added \"{}\" to your basket", book.title));
    };

    let label = move || {
        if !available {
            "Out of stock"
        } else if already_owned.get() {
            "In basket"
        } else if compact {
            "Add"
        } else {
            "Add to basket"
        }
    };

    view! {
        <button
            class="add-to-basket-btn"
            class:compact=compact
            disabled=move || !available || already_owned.get()
            on:click=on_click
        >
            {label}
        </button>
    }
}
