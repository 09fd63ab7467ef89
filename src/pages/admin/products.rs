//! Admin Product Management

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::basket::format_price;
use crate::catalog::{self, CatalogFilter, SortOrder};
use crate::components::{spawn_load, DeleteConfirmButton, ErrorBanner, LoadState, RequireAdmin, Spinner};
use crate::context::use_toasts;
use crate::error::ApiError;
use crate::models::{Book, BookKind, NewProduct};
use crate::pages::admin::AdminNav;
use crate::store::{store_handle_error, store_token, use_app_store};
use crate::validation::validate_product;

const KINDS: [BookKind; 3] = [BookKind::Textbook, BookKind::Ebook, BookKind::Audiobook];

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminNav />
            <ProductManagement />
        </RequireAdmin>
    }
}

#[component]
fn ProductManagement() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let (products, set_products) = signal(LoadState::<Vec<Book>>::Loading);
    let (query, set_query) = signal(String::new());

    Effect::new(move |_| {
        let token = store_token(&store);
        spawn_load(set_products, async move {
            match token {
                Some(token) => api::list_products(&token).await,
                None => Err(ApiError::Unauthorized("Please log in to continue.".to_string())),
            }
        });
    });

    let on_created = move |book: Book| {
        let _ = set_products.try_update(|state| {
            if let LoadState::Ready(list) = state {
                list.insert(0, book);
            }
        });
    };

    let delete_product = move |id: String| {
        let Some(token) = store_token(&store) else { return };
        spawn_local(async move {
            match api::delete_product(&token, &id).await {
                Ok(()) => {
                    let _ = set_products.try_update(|state| {
                        if let LoadState::Ready(list) = state {
                            list.retain(|b| b.id != id);
                        }
                    });
                    toasts.success("Product deleted");
                }
                Err(e) => {
                    store_handle_error(&store, &e);
                    toasts.api_error(&e);
                }
            }
        });
    };

    view! {
        <section class="admin-products">
            <h1>"Products"</h1>
            <NewProductForm on_created=on_created />
            <input
                type="search"
                class="admin-search"
                placeholder="Filter products..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            {move || match products.get() {
                LoadState::Loading => view! { <Spinner /> }.into_any(),
                LoadState::Failed(msg) => view! { <ErrorBanner message=msg /> }.into_any(),
                LoadState::Ready(list) => {
                    let filter = CatalogFilter { query: query.get(), ..Default::default() };
                    let shown = catalog::apply(&list, &filter, SortOrder::Title);
                    view! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Author"</th>
                                    <th>"Type"</th>
                                    <th>"Price"</th>
                                    <th>"Stock"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {shown.into_iter().map(|book| {
                                    let id = book.id.clone();
                                    let stock = if book.kind().is_digital() {
                                        "-".to_string()
                                    } else {
                                        book.stock.map(|s| s.to_string()).unwrap_or_else(|| "?".to_string())
                                    };
                                    let kind_label = book.kind().label();
                                    view! {
                                        <tr>
                                            <td>{book.title}</td>
                                            <td>{book.author}</td>
                                            <td>{kind_label}</td>
                                            <td>{format_price(book.price)}</td>
                                            <td>{stock}</td>
                                            <td>
                                                <DeleteConfirmButton
                                                    button_class="delete-btn"
                                                    label="Delete"
                                                    on_confirm=move |_| delete_product(id.clone())
                                                />
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </section>
    }
}

/// Trimmed text, `None` when blank
fn optional_text(value: String) -> Option<String> {
    catalog::non_empty(value.trim().to_string())
}

fn optional_number(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

#[component]
fn FormInput(
    #[prop(into)] placeholder: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type=input_type.unwrap_or_else(|| "text".to_string())
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| set_value.set(event_target_value(&ev))
        />
    }
}

#[component]
fn NewProductForm(#[prop(into)] on_created: Callback<Book>) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let (title, set_title) = signal(String::new());
    let (author, set_author) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (kind, set_kind) = signal(BookKind::Textbook);
    let (cover_url, set_cover_url) = signal(String::new());
    // Audiobook
    let (audio_url, set_audio_url) = signal(String::new());
    let (narrator, set_narrator) = signal(String::new());
    let (duration, set_duration) = signal(String::new());
    // E-book
    let (pdf_url, set_pdf_url) = signal(String::new());
    let (pages, set_pages) = signal(String::new());
    // Textbook
    let (subject, set_subject) = signal(String::new());
    let (grade, set_grade) = signal(String::new());
    let (isbn, set_isbn) = signal(String::new());
    let (stock, set_stock) = signal(String::new());
    let (condition, set_condition) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let parsed_price = match validate_product(&title.get_untracked(), &author.get_untracked(), &price.get_untracked()) {
            Ok(p) => p,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        let product = NewProduct {
            title: title.get_untracked().trim().to_string(),
            author: author.get_untracked().trim().to_string(),
            description: description.get_untracked(),
            price: parsed_price,
            kind: kind.get_untracked(),
            cover_url: optional_text(cover_url.get_untracked()),
            audio_url: optional_text(audio_url.get_untracked()),
            narrator: optional_text(narrator.get_untracked()),
            duration_minutes: optional_number(&duration.get_untracked()),
            pdf_url: optional_text(pdf_url.get_untracked()),
            pages: optional_number(&pages.get_untracked()),
            subject: optional_text(subject.get_untracked()),
            grade: optional_text(grade.get_untracked()),
            isbn: optional_text(isbn.get_untracked()),
            stock: optional_number(&stock.get_untracked()),
            condition: optional_text(condition.get_untracked()),
        }
        .retain_kind_fields();
        let Some(token) = store_token(&store) else { return };
        set_error.set(None);
        spawn_local(async move {
            match api::create_product(&token, &product).await {
                Ok(mut created) => {
                    created.declared_kind = Some(product.kind);
                    toasts.success(format!("Added \"{}\"", created.title));
                    for set in [
                        set_title, set_author, set_description, set_price, set_cover_url, set_audio_url, set_narrator,
                        set_duration, set_pdf_url, set_pages, set_subject, set_grade, set_isbn, set_stock, set_condition,
                    ] {
                        let _ = set.try_set(String::new());
                    }
                    on_created.run(created);
                }
                Err(e) => {
                    store_handle_error(&store, &e);
                    let _ = set_error.try_set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <form class="admin-form" on:submit=on_submit>
            <h2>"Add product"</h2>
            <FormInput placeholder="Title" value=title set_value=set_title />
            <FormInput placeholder="Author" value=author set_value=set_author />
            <FormInput placeholder="Price" value=price set_value=set_price />
            <select on:change=move |ev| {
                if let Ok(k) = event_target_value(&ev).parse::<BookKind>() {
                    set_kind.set(k);
                }
            }>
                {KINDS.into_iter().map(|k| view! {
                    <option value=k.as_str() selected=move || kind.get() == k>{k.label()}</option>
                }).collect_view()}
            </select>
            <Show when=move || kind.get() == BookKind::Audiobook>
                <FormInput placeholder="Audio file URL" value=audio_url set_value=set_audio_url input_type="url" />
                <FormInput placeholder="Narrator" value=narrator set_value=set_narrator />
                <FormInput placeholder="Duration (minutes)" value=duration set_value=set_duration input_type="number" />
            </Show>
            <Show when=move || kind.get() == BookKind::Ebook>
                <FormInput placeholder="PDF URL" value=pdf_url set_value=set_pdf_url input_type="url" />
                <FormInput placeholder="Pages" value=pages set_value=set_pages input_type="number" />
            </Show>
            <Show when=move || kind.get() == BookKind::Textbook>
                <FormInput placeholder="Subject" value=subject set_value=set_subject />
                <FormInput placeholder="Grade" value=grade set_value=set_grade />
                <FormInput placeholder="ISBN" value=isbn set_value=set_isbn />
                <FormInput placeholder="Stock" value=stock set_value=set_stock input_type="number" />
                <FormInput placeholder="Condition" value=condition set_value=set_condition />
            </Show>
            <FormInput placeholder="Cover image URL" value=cover_url set_value=set_cover_url input_type="url" />
            <textarea
                placeholder="Description (markdown)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit">"Add product"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_from_inputs() {
        assert_eq!(optional_text("  Physics ".to_string()), Some("Physics".to_string()));
        assert_eq!(optional_text("   ".to_string()), None);
        assert_eq!(optional_number(" 320 "), Some(320));
        assert_eq!(optional_number("abc"), None);
        assert_eq!(optional_number(""), None);
    }
}
