//! Wishlist Endpoints

use crate::error::ApiResult;
use crate::models::{Book, WishlistRequest};

/// Saved books. Entries keep the type the API sends, see `Book::kind`.
pub async fn list_wishlist(token: &str) -> ApiResult<Vec<Book>> {
    super::get_list("/api/wishlist", Some(token)).await
}

pub async fn add_to_wishlist(token: &str, book_id: &str) -> ApiResult<()> {
    super::post_unit("/api/wishlist", &WishlistRequest { book_id }, Some(token)).await
}

pub async fn remove_from_wishlist(token: &str, book_id: &str) -> ApiResult<()> {
    super::delete(&format!("/api/wishlist/{}", book_id), Some(token)).await
}

pub fn wishlist_contains(saved: &[Book], book_id: &str) -> bool {
    saved.iter().any(|b| b.id == book_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ListResponse;
    use crate::basket::Basket;
    use crate::models::{BasketItem, BookKind};

    fn decode(json: &str) -> Vec<Book> {
        serde_json::from_str::<ListResponse<Book>>(json).unwrap().into_vec()
    }

    #[test]
    fn test_untyped_wishlist_ebook_keeps_digital_cap() {
        let saved = decode(r#"[{"_id":"e1","title":"Digital Dune","price":5.0,"pdfFile":"/f/d.pdf"}]"#);
        let book = &saved[0];
        assert_eq!(book.kind(), BookKind::Ebook);
        assert_eq!(book.detail_path(), "/ebooks/e1");

        let mut basket = Basket::new();
        basket.add(BasketItem::from_book(book, 1));
        basket.increment("e1");
        basket.increment("e1");
        assert_eq!(basket.quantity_of("e1"), 1);
    }

    #[test]
    fn test_wishlist_contains() {
        let saved = decode(r#"{"items":[{"_id":"a","title":"A"},{"_id":"b","title":"B","type":"audiobook"}]}"#);
        assert!(wishlist_contains(&saved, "b"));
        assert!(!wishlist_contains(&saved, "c"));
        assert_eq!(saved[1].kind(), BookKind::Audiobook);
    }
}
