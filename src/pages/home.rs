//! Home Page
//!
//! A featured shelf per product line.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::api;
use crate::components::{spawn_load, BookGrid, ErrorBanner, LoadState, Spinner};
use crate::config::FEATURED_COUNT;
use crate::models::{Book, BookKind};

/// The first books of a list, in the order the API returned them
pub fn featured(books: &[Book]) -> Vec<Book> {
    books.iter().take(FEATURED_COUNT).cloned().collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Find your next book"</h1>
            <p>"Audiobooks, e-books and textbooks in one place."</p>
        </section>
        <FeaturedShelf kind=BookKind::Audiobook title="Popular audiobooks" />
        <FeaturedShelf kind=BookKind::Ebook title="E-books to start tonight" />
        <FeaturedShelf kind=BookKind::Textbook title="Textbooks" />
    }
}

#[component]
fn FeaturedShelf(kind: BookKind, #[prop(into)] title: String) -> impl IntoView {
    let (books, set_books) = signal(LoadState::<Vec<Book>>::Loading);

    Effect::new(move |_| {
        spawn_load(set_books, api::list_books(kind));
    });

    view! {
        <section class="featured-shelf">
            <header class="shelf-header">
                <h2>{title}</h2>
                <A href=kind.route()>"See all"</A>
            </header>
            {move || match books.get() {
                LoadState::Loading => view! { <Spinner /> }.into_any(),
                LoadState::Failed(msg) => view! { <ErrorBanner message=msg /> }.into_any(),
                LoadState::Ready(list) => {
                    view! { <BookGrid books=featured(&list) empty_message="Coming soon." /> }.into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_keeps_api_order() {
        let books: Vec<Book> = (0..6)
            .map(|i| {
                let mut b: Book = serde_json::from_str(&format!(r#"{{"id":"{}","title":"B{}"}}"#, i, i)).unwrap();
                b.rating = Some(f64::from(6 - i));
                b
            })
            .collect();
        let shown: Vec<String> = featured(&books).into_iter().map(|b| b.id).collect();
        assert_eq!(shown, ["0", "1", "2", "3"]);
        assert_eq!(featured(&books[..2]).len(), 2);
    }
}
