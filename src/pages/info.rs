//! Static Pages
//!
//! FAQ, contact and terms. Content is markdown rendered at runtime.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_toasts;
use crate::markdown::parse_markdown;
use crate::validation::validate_contact;

const FAQ: &str = r#"
## How do I listen to an audiobook?

Open the audiobook's page while logged in and press **Play**. You can skip
back or forward 15 seconds and change the playback speed.

## Can I read e-books offline?

E-books open in the browser's PDF reader. Use **Open in new tab** and save
the file from there.

## Why can I only add one copy of an e-book?

Digital books are tied to your account, so one copy is all you need.

## Do you ship textbooks internationally?

Textbooks ship within the country only. Stock shown on each page is
updated as orders come in.

## I forgot my password

Contact us through the [contact page](/contact) and we will reset it.
"#;

const TERMS: &str = r#"
## Terms of use

1. Digital purchases (e-books and audiobooks) are licensed for personal use
   and may not be redistributed.
2. Physical textbooks may be returned unused within 14 days.
3. Reviews must be about the book. We remove reviews containing abuse or
   personal data.
4. Accounts are personal. Keep your password to yourself.

## Privacy

We store your name, email address and order history. Your login token and
basket are kept in your browser's local storage until you log out.
"#;

#[component]
fn MarkdownPage(#[prop(into)] title: String, source: &'static str) -> impl IntoView {
    view! {
        <section class="static-page">
            <h1>{title}</h1>
            <div class="markdown" inner_html=parse_markdown(source)></div>
        </section>
    }
}

#[component]
pub fn FaqPage() -> impl IntoView {
    view! { <MarkdownPage title="Frequently asked questions" source=FAQ /> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <MarkdownPage title="Terms & privacy" source=TERMS /> }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = use_toasts();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(msg) = validate_contact(&name.get_untracked(), &email.get_untracked(), &message.get_untracked()) {
            set_error.set(Some(msg));
            return;
        }
        log::info!("contact form submitted");
        set_error.set(None);
        set_message.set(String::new());
        toasts.success("Thanks! We'll get back to you soon.");
    };

    view! {
        <section class="static-page contact-page">
            <h1>"Contact us"</h1>
            <p>"Questions about an order or your account? Send us a message."</p>
            <form class="contact-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Your email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Message"
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit">"Send"</button>
            </form>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="static-page not-found">
            <h1>"Page not found"</h1>
            <p>"We couldn't find that page."</p>
            <A href="/">"Back to the store"</A>
        </section>
    }
}
