//! E-book Pages
//!
//! List page and detail page with an embedded PDF reader.

use leptos::prelude::*;

use crate::models::{Book, BookKind};
use crate::pages::books::{render_detail, use_book, BookDetailShell, BookListPage};
use crate::store::{store_is_logged_in, use_app_store};

/// Viewer URL for a PDF: opens on `page` with the browser toolbar shown
pub fn pdf_viewer_src(url: &str, page: u32) -> String {
    let base = url.split('#').next().unwrap_or(url);
    format!("{}#page={}&toolbar=1", base, page.max(1))
}

#[component]
pub fn EbooksPage() -> impl IntoView {
    view! {
        <BookListPage
            kind=BookKind::Ebook
            title="E-books"
            intro="Digital editions you can start reading the moment you find them."
        />
    }
}

#[component]
pub fn EbookDetailPage() -> impl IntoView {
    let book = use_book(BookKind::Ebook);
    move || {
        render_detail(book.get(), |book: Book| {
            let pdf_url = book.pdf_url.clone();
            let title = book.title.clone();
            let pages = book.pages;
            view! {
                <BookDetailShell book=book>
                    {pages.map(|p| view! { <p class="ebook-meta">{format!("{} pages", p)}</p> })}
                    {pdf_url.map(|url| view! { <PdfViewer url=url title=title.clone() /> })}
                </BookDetailShell>
            }
        })
    }
}

#[component]
fn PdfViewer(#[prop(into)] url: String, #[prop(into)] title: String) -> impl IntoView {
    let store = use_app_store();
    let (open, set_open) = signal(false);
    let (expanded, set_expanded) = signal(false);
    let src = StoredValue::new(pdf_viewer_src(&url, 1));
    let url = StoredValue::new(url);
    let title = StoredValue::new(title);

    view! {
        <Show
            when=move || store_is_logged_in(&store)
            fallback=|| view! { <p class="notice">"Log in to read this e-book online."</p> }
        >
            <div class="pdf-reader" class:expanded=move || expanded.get()>
                <div class="pdf-toolbar">
                    <button on:click=move |_| set_open.update(|o| *o = !*o)>
                        {move || if open.get() { "Close reader" } else { "Read online" }}
                    </button>
                    <Show when=move || open.get()>
                        <button on:click=move |_| set_expanded.update(|e| *e = !*e)>
                            {move || if expanded.get() { "Exit full width" } else { "Full width" }}
                        </button>
                    </Show>
                    <a href=move || url.get_value() target="_blank" rel="noopener">"Open in new tab"</a>
                </div>
                <Show when=move || open.get()>
                    <iframe class="pdf-viewer" src=src.get_value() title=title.get_value()></iframe>
                </Show>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_viewer_src() {
        assert_eq!(pdf_viewer_src("/files/a.pdf", 1), "/files/a.pdf#page=1&toolbar=1");
        assert_eq!(pdf_viewer_src("/files/a.pdf#zoom=80", 0), "/files/a.pdf#page=1&toolbar=1");
    }
}
