//! Textbook Pages
//!
//! Catalog with multi-field filtering, and a detail page with the
//! physical edition's specs.

use leptos::prelude::*;

use crate::api;
use crate::catalog::{self, non_empty, parse_price, CatalogFilter, SortOrder};
use crate::components::{spawn_load, BookGrid, ErrorBanner, LoadState, Spinner};
use crate::models::{Book, BookKind};
use crate::pages::books::{render_detail, use_book, BookDetailShell, SortSelect};

#[component]
pub fn TextbooksPage() -> impl IntoView {
    let (books, set_books) = signal(LoadState::<Vec<Book>>::Loading);

    // Filter inputs
    let (query, set_query) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (grade, set_grade) = signal(String::new());
    let (min_price, set_min_price) = signal(String::new());
    let (max_price, set_max_price) = signal(String::new());
    let (in_stock_only, set_in_stock_only) = signal(false);
    let (sort, set_sort) = signal(SortOrder::Title);

    Effect::new(move |_| {
        spawn_load(set_books, api::list_books(BookKind::Textbook));
    });

    let filter = Memo::new(move |_| CatalogFilter {
        query: query.get(),
        subject: non_empty(subject.get()),
        grade: non_empty(grade.get()),
        min_price: parse_price(&min_price.get()),
        max_price: parse_price(&max_price.get()),
        in_stock_only: in_stock_only.get(),
    });

    let options = move |field: fn(&Book) -> Option<&str>| {
        books.with(|state| state.ready().map(|list| catalog::distinct_values(list, field)).unwrap_or_default())
    };

    let reset = move |_| {
        set_query.set(String::new());
        set_subject.set(String::new());
        set_grade.set(String::new());
        set_min_price.set(String::new());
        set_max_price.set(String::new());
        set_in_stock_only.set(false);
    };

    view! {
        <section class="textbook-catalog">
            <header class="page-header">
                <h1>"Textbooks"</h1>
                <p class="page-intro">"New and used print editions for every course."</p>
            </header>
            <div class="catalog-layout">
                <aside class="filter-panel">
                    <input
                        type="search"
                        placeholder="Title, author, ISBN..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <label>
                        "Subject"
                        <select prop:value=move || subject.get() on:change=move |ev| set_subject.set(event_target_value(&ev))>
                            <option value="">"Any"</option>
                            {move || options(|b| b.subject.as_deref()).into_iter().map(|s| view! {
                                <option value=s.clone()>{s.clone()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label>
                        "Grade"
                        <select prop:value=move || grade.get() on:change=move |ev| set_grade.set(event_target_value(&ev))>
                            <option value="">"Any"</option>
                            {move || options(|b| b.grade.as_deref()).into_iter().map(|g| view! {
                                <option value=g.clone()>{g.clone()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <div class="price-range">
                        <input
                            type="number"
                            min="0"
                            placeholder="Min $"
                            prop:value=move || min_price.get()
                            on:input=move |ev| set_min_price.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            min="0"
                            placeholder="Max $"
                            prop:value=move || max_price.get()
                            on:input=move |ev| set_max_price.set(event_target_value(&ev))
                        />
                    </div>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || in_stock_only.get()
                            on:change=move |ev| set_in_stock_only.set(event_target_checked(&ev))
                        />
                        "In stock only"
                    </label>
                    <Show when=move || filter.with(CatalogFilter::is_active)>
                        <button class="reset-btn" on:click=reset>"Clear filters"</button>
                    </Show>
                </aside>
                <div class="catalog-results">
                    <div class="list-controls">
                        <SortSelect sort=sort set_sort=set_sort />
                    </div>
                    {move || match books.get() {
                        LoadState::Loading => view! { <Spinner /> }.into_any(),
                        LoadState::Failed(msg) => view! { <ErrorBanner message=msg /> }.into_any(),
                        LoadState::Ready(list) => {
                            let shown = filter.with(|f| catalog::apply(&list, f, sort.get()));
                            let count = format!("{} of {} textbooks", shown.len(), list.len());
                            view! {
                                <p class="result-count">{count}</p>
                                <BookGrid books=shown empty_message="No textbooks match these filters." />
                            }.into_any()
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TextbookDetailPage() -> impl IntoView {
    let book = use_book(BookKind::Textbook);
    move || {
        render_detail(book.get(), |book: Book| {
            let specs = textbook_specs(&book);
            view! {
                <BookDetailShell book=book>
                    <dl class="textbook-specs">
                        {specs.into_iter().map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        }).collect_view()}
                    </dl>
                </BookDetailShell>
            }
        })
    }
}

/// Label/value rows for the details table, skipping unknown fields
fn textbook_specs(book: &Book) -> Vec<(&'static str, String)> {
    let stock = match book.stock {
        Some(0) => Some("Out of stock".to_string()),
        Some(n) => Some(format!("{} in stock", n)),
        None => None,
    };
    [
        ("ISBN", book.isbn.clone()),
        ("Subject", book.subject.clone()),
        ("Grade", book.grade.clone()),
        ("Condition", book.condition.clone()),
        ("Availability", stock),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_specs_skip_missing() {
        let book: Book = serde_json::from_str(r#"{"id":"1","title":"T","isbn":"978-0","stock":0}"#).unwrap();
        let specs = textbook_specs(&book);
        assert_eq!(
            specs,
            vec![("ISBN", "978-0".to_string()), ("Availability", "Out of stock".to_string())]
        );
    }
}
