//! Basket Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::basket::format_price;
use crate::components::DeleteConfirmButton;
use crate::store::{
    store_clear_basket, store_decrement, store_increment, store_remove_from_basket, use_app_store, AppStateStoreFields,
};

#[component]
pub fn CartPage() -> impl IntoView {
    let store = use_app_store();
    let items = move || store.basket().with(|b| b.items().to_vec());
    let is_empty = move || store.basket().with(|b| b.is_empty());

    view! {
        <section class="cart-page">
            <h1>"Your basket"</h1>
            <Show
                when=move || !is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"Your basket is empty."</p>
                        <A href="/">"Browse the store"</A>
                    </div>
                }
            >
                <table class="cart-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Type"</th>
                            <th>"Price"</th>
                            <th>"Quantity"</th>
                            <th>"Total"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=items
                            key=|item| (item.id.clone(), item.quantity)
                            children=move |item| {
                                let id = StoredValue::new(item.id.clone());
                                let digital = item.kind.is_digital();
                                view! {
                                    <tr>
                                        <td>{item.title.clone()}</td>
                                        <td>{item.kind.label()}</td>
                                        <td>{format_price(item.price)}</td>
                                        <td class="qty-cell">
                                            <button
                                                class="qty-btn"
                                                on:click=move |_| store_decrement(&store, &id.get_value())
                                            >
                                                "−"
                                            </button>
                                            <span class="qty">{item.quantity}</span>
                                            <button
                                                class="qty-btn"
                                                disabled=digital
                                                title=if digital { "Digital books are limited to one copy" } else { "" }
                                                on:click=move |_| store_increment(&store, &id.get_value())
                                            >
                                                "+"
                                            </button>
                                        </td>
                                        <td>{format_price(item.line_total())}</td>
                                        <td>
                                            <DeleteConfirmButton
                                                button_class="remove-btn"
                                                label="Remove"
                                                on_confirm=move |_| store_remove_from_basket(&store, &id.get_value())
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <div class="cart-summary">
                    <p>
                        {move || format!("{} item(s)", store.basket().with(|b| b.total_items()))}
                    </p>
                    <p class="cart-subtotal">
                        "Subtotal: " {move || format_price(store.basket().with(|b| b.subtotal()))}
                    </p>
                    <DeleteConfirmButton
                        button_class="clear-btn"
                        label="Empty basket"
                        on_confirm=move |_| store_clear_basket(&store)
                    />
                    <A href="/">"Continue shopping"</A>
                </div>
            </Show>
        </section>
    }
}
