//! Shared Book Pages
//!
//! List page used for audiobooks and e-books, plus the detail shell every
//! product line renders inside.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::basket::format_price;
use crate::catalog::{self, CatalogFilter, SortOrder};
use crate::components::{
    cover_src, spawn_load, AddToBasketButton, BookGrid, ErrorBanner, LoadState, ReviewSection, Spinner, StarRating,
    WishlistButton,
};
use crate::markdown::parse_markdown;
use crate::models::{Book, BookKind};

/// Load the book named by the `:id` route param
pub fn use_book(kind: BookKind) -> ReadSignal<LoadState<Book>> {
    let params = use_params_map();
    let (book, set_book) = signal(LoadState::<Book>::Loading);
    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        log::debug!("loading {} {}", kind.as_str(), id);
        spawn_load(set_book, async move { api::get_book(&id, kind).await });
    });
    book
}

/// Searchable grid of one product line
#[component]
pub fn BookListPage(kind: BookKind, #[prop(into)] title: String, #[prop(into)] intro: String) -> impl IntoView {
    let (books, set_books) = signal(LoadState::<Vec<Book>>::Loading);
    let (query, set_query) = signal(String::new());
    let (sort, set_sort) = signal(SortOrder::Title);

    Effect::new(move |_| {
        spawn_load(set_books, api::list_books(kind));
    });

    view! {
        <section class="book-list-page">
            <header class="page-header">
                <h1>{title}</h1>
                <p class="page-intro">{intro}</p>
            </header>
            <div class="list-controls">
                <input
                    type="search"
                    placeholder="Search by title or author..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <SortSelect sort=sort set_sort=set_sort />
            </div>
            {move || match books.get() {
                LoadState::Loading => view! { <Spinner /> }.into_any(),
                LoadState::Failed(msg) => view! { <ErrorBanner message=msg /> }.into_any(),
                LoadState::Ready(list) => {
                    let filter = CatalogFilter { query: query.get(), ..Default::default() };
                    let shown = catalog::apply(&list, &filter, sort.get());
                    let empty = if filter.is_active() { "No books match your search." } else { "Nothing here yet." };
                    view! { <BookGrid books=shown empty_message=empty /> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
pub fn SortSelect(sort: ReadSignal<SortOrder>, set_sort: WriteSignal<SortOrder>) -> impl IntoView {
    view! {
        <select
            class="sort-select"
            prop:value=move || sort.get().as_str().to_string()
            on:change=move |ev| set_sort.set(event_target_value(&ev).parse().unwrap_or_default())
        >
            {SortOrder::ALL.into_iter().map(|order| view! {
                <option value=order.as_str()>{order.label()}</option>
            }).collect_view()}
        </select>
    }
}

/// Detail page frame: cover, metadata, actions, kind-specific body, reviews
#[component]
pub fn BookDetailShell(book: Book, children: Children) -> impl IntoView {
    let description = parse_markdown(&book.description);
    let cover = cover_src(&book);

    view! {
        <article class="book-detail">
            <div class="book-detail-top">
                <img class="book-detail-cover" src=cover alt=book.title.clone() />
                <div class="book-detail-info">
                    <span class="book-kind">{book.kind().label()}</span>
                    <h1>{book.title.clone()}</h1>
                    <p class="book-author">"by " {book.author.clone()}</p>
                    <StarRating rating=book.rating />
                    <p class="book-price">{format_price(book.price)}</p>
                    <div class="book-actions">
                        <AddToBasketButton book=book.clone() />
                        <WishlistButton book_id=book.id.clone() />
                    </div>
                    <div class="book-description" inner_html=description></div>
                </div>
            </div>
            <div class="book-detail-body">{children()}</div>
            <ReviewSection book_id=book.id.clone() />
        </article>
    }
}

/// Match arm helper for detail pages
pub fn render_detail<F, V>(state: LoadState<Book>, body: F) -> AnyView
where
    F: FnOnce(Book) -> V,
    V: IntoView + 'static,
{
    match state {
        LoadState::Loading => view! { <Spinner /> }.into_any(),
        LoadState::Failed(msg) => view! { <ErrorBanner message=msg /> }.into_any(),
        LoadState::Ready(book) => body(book).into_any(),
    }
}
