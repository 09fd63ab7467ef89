//! Login and Registration Pages

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::context::use_toasts;
use crate::store::{store_login, use_app_store};
use crate::validation::{validate_login, validate_registration};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if let Err(msg) = validate_login(&email, &password) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(session) => {
                    toasts.success(format!("Welcome back, {}!", session.user.name));
                    store_login(&store, session);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.user_message()));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Log in"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
            <p class="auth-switch">"New here? " <A href="/register">"Create an account"</A></p>
        </section>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if let Err(msg) = validate_registration(&name, &email, &password, &confirm.get_untracked()) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&name, &email, &password).await {
                Ok(session) => {
                    toasts.success("Your account is ready");
                    store_login(&store, session);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e.user_message()));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Create an account"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
            <p class="auth-switch">"Already have an account? " <A href="/login">"Log in"</A></p>
        </section>
    }
}
