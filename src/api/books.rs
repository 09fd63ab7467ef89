//! Catalog Endpoints
//!
//! The list endpoints are split per product line and do not always
//! include a type field, so every returned book is stamped with the
//! kind of the endpoint it came from.

use crate::error::ApiResult;
use crate::models::{Book, BookKind};

fn stamp(mut books: Vec<Book>, kind: BookKind) -> Vec<Book> {
    for book in &mut books {
        book.declared_kind = Some(kind);
    }
    books
}

fn list_path(kind: BookKind) -> &'static str {
    match kind {
        BookKind::Audiobook => "/api/books/audiobooks",
        BookKind::Ebook => "/api/books/getDigitalBooks",
        BookKind::Textbook => "/api/books/getPhysicalBooks",
    }
}

pub async fn list_books(kind: BookKind) -> ApiResult<Vec<Book>> {
    let books = super::get_list(list_path(kind), None).await?;
    Ok(stamp(books, kind))
}

/// Fetch one book; `kind` is the product line of the page asking for it.
pub async fn get_book(id: &str, kind: BookKind) -> ApiResult<Book> {
    let mut book: Book = super::get_item(&format!("/api/books/singleBook/{}", id), None).await?;
    book.declared_kind = Some(kind);
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_overrides_kind() {
        let books: Vec<Book> = serde_json::from_str(r#"[{"_id":"1","title":"A","type":"textbook"}]"#).unwrap();
        let books = stamp(books, BookKind::Ebook);
        assert_eq!(books[0].kind(), BookKind::Ebook);
    }

    #[test]
    fn test_list_paths() {
        assert_eq!(list_path(BookKind::Ebook), "/api/books/getDigitalBooks");
        assert_eq!(list_path(BookKind::Textbook), "/api/books/getPhysicalBooks");
    }
}
