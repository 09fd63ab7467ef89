//! Book Card Components
//!
//! Catalog tiles shared by the home page and the three list pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::basket::format_price;
use crate::components::{AddToBasketButton, StarRating};
use crate::models::Book;

const PLACEHOLDER_COVER: &str = "/public/cover-placeholder.png";

pub fn cover_src(book: &Book) -> String {
    book.cover_url.clone().filter(|u| !u.trim().is_empty()).unwrap_or_else(|| PLACEHOLDER_COVER.to_string())
}

#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    let href = book.detail_path();
    let cover = cover_src(&book);
    let subtitle = match (&book.narrator, &book.subject) {
        (Some(narrator), _) => format!("Narrated by {}", narrator),
        (None, Some(subject)) => subject.clone(),
        _ => book.kind().label().to_string(),
    };
    let out_of_stock = !book.in_stock();
    let title = book.title.clone();
    let alt = book.title.clone();
    let author = book.author.clone();
    let price = format_price(book.price);
    let rating = book.rating;

    view! {
        <article class="book-card" class:out-of-stock=out_of_stock>
            <A href=href.clone()>
                <img class="book-cover" src=cover alt=alt loading="lazy" />
            </A>
            <div class="book-card-body">
                <A href=href>
                    <h3 class="book-title">{title}</h3>
                </A>
                <p class="book-author">{author}</p>
                <p class="book-subtitle">{subtitle}</p>
                <StarRating rating=rating />
                <div class="book-card-footer">
                    <span class="book-price">{price}</span>
                    <AddToBasketButton book=book compact=true />
                </div>
            </div>
        </article>
    }
}

/// Grid of cards with an empty-state message
#[component]
pub fn BookGrid(books: Vec<Book>, #[prop(into)] empty_message: String) -> impl IntoView {
    if books.is_empty() {
        return view! { <div class="empty-state">{empty_message}</div> }.into_any();
    }
    view! {
        <div class="book-grid">
            {books.into_iter().map(|book| view! { <BookCard book=book /> }).collect_view()}
        </div>
    }
    .into_any()
}
