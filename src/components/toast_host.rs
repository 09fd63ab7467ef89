//! Toast Host Component
//!
//! Renders the active toasts in a fixed corner stack.

use leptos::prelude::*;

use crate::context::use_toasts;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            <span>{toast.message}</span>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
