//! Frontend Models
//!
//! Data structures matching the remote API's JSON.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product line a book belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookKind {
    #[serde(alias = "audio")]
    Audiobook,
    #[serde(alias = "digital", alias = "e-book")]
    Ebook,
    #[default]
    #[serde(alias = "physical")]
    Textbook,
}

impl BookKind {
    pub fn label(&self) -> &'static str {
        match self {
            BookKind::Audiobook => "Audiobook",
            BookKind::Ebook => "E-book",
            BookKind::Textbook => "Textbook",
        }
    }

    /// Route prefix for this kind's pages
    pub fn route(&self) -> &'static str {
        match self {
            BookKind::Audiobook => "/audiobooks",
            BookKind::Ebook => "/ebooks",
            BookKind::Textbook => "/textbooks",
        }
    }

    /// Digital goods are delivered once, never shipped
    pub fn is_digital(&self) -> bool {
        !matches!(self, BookKind::Textbook)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookKind::Audiobook => "audiobook",
            BookKind::Ebook => "ebook",
            BookKind::Textbook => "textbook",
        }
    }
}

impl FromStr for BookKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audiobook" => Ok(BookKind::Audiobook),
            "ebook" => Ok(BookKind::Ebook),
            "textbook" => Ok(BookKind::Textbook),
            other => Err(format!("unknown book type: {}", other)),
        }
    }
}

/// A catalog entry. Kind-specific fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "coverImage", alias = "image")]
    pub cover_url: Option<String>,
    /// Product line as sent by the API, `None` when the payload omits it
    #[serde(default, rename = "type", alias = "kind", skip_serializing_if = "Option::is_none")]
    pub declared_kind: Option<BookKind>,
    #[serde(default, alias = "averageRating")]
    pub rating: Option<f64>,

    // Audiobooks
    #[serde(default, alias = "audioFile")]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub narrator: Option<String>,
    #[serde(default, alias = "duration")]
    pub duration_minutes: Option<u32>,

    // E-books
    #[serde(default, alias = "pdfFile")]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,

    // Textbooks
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, alias = "gradeLevel")]
    pub grade: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub condition: Option<String>,
}

impl Book {
    /// Declared product line, otherwise inferred from the media fields.
    /// Only a book with neither falls back to a textbook.
    pub fn kind(&self) -> BookKind {
        self.declared_kind.unwrap_or_else(|| {
            if self.audio_url.is_some() || self.narrator.is_some() || self.duration_minutes.is_some() {
                BookKind::Audiobook
            } else if self.pdf_url.is_some() {
                BookKind::Ebook
            } else {
                BookKind::Textbook
            }
        })
    }

    pub fn in_stock(&self) -> bool {
        self.kind().is_digital() || self.stock.map_or(true, |s| s > 0)
    }

    pub fn detail_path(&self) -> String {
        format!("{}/{}", self.kind().route(), self.id)
    }
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "username")]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Logged-in session persisted to local storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Login/register response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Session { token: resp.token, user: resp.user }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "username")]
    pub user_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistRequest<'a> {
    pub book_id: &'a str,
}

/// Admin dashboard payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_products: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub sales_by_month: Vec<MonthlySales>,
    pub top_books: Vec<TopBook>,
    pub recent_orders: Vec<RecentOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlySales {
    pub month: String,
    pub revenue: f64,
    pub orders: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopBook {
    pub title: String,
    pub sold: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentOrder {
    #[serde(alias = "_id")]
    pub id: String,
    pub customer: String,
    pub total: f64,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Admin: create user body
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Admin: create product body
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub author: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: BookKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl NewProduct {
    /// Drops the fields that belong to the other product lines
    pub fn retain_kind_fields(mut self) -> Self {
        if self.kind != BookKind::Audiobook {
            self.audio_url = None;
            self.narrator = None;
            self.duration_minutes = None;
        }
        if self.kind != BookKind::Ebook {
            self.pdf_url = None;
            self.pages = None;
        }
        if self.kind != BookKind::Textbook {
            self.subject = None;
            self.grade = None;
            self.isbn = None;
            self.stock = None;
            self.condition = None;
        }
        self
    }
}

/// Basket line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketItem {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub kind: BookKind,
}

impl BasketItem {
    pub fn from_book(book: &Book, quantity: u32) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            price: book.price,
            quantity,
            kind: book.kind(),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_accepts_api_field_names() {
        let json = r#"{
            "_id": "64f1",
            "title": "Dune",
            "author": "Frank Herbert",
            "price": 14.99,
            "coverImage": "/img/dune.jpg",
            "audioFile": "/audio/dune.mp3",
            "narrator": "Scott Brick",
            "averageRating": 4.5
        }"#;
        let book: Book = serde_json::from_str(json).expect("deserialize");
        assert_eq!(book.id, "64f1");
        assert_eq!(book.cover_url.as_deref(), Some("/img/dune.jpg"));
        assert_eq!(book.audio_url.as_deref(), Some("/audio/dune.mp3"));
        assert_eq!(book.rating, Some(4.5));
        // No type field: the audio fields identify it
        assert_eq!(book.declared_kind, None);
        assert_eq!(book.kind(), BookKind::Audiobook);
    }

    #[test]
    fn test_untyped_pdf_book_is_an_ebook() {
        let book: Book = serde_json::from_str(r#"{"_id":"e1","title":"Digital Dune","price":5.0,"pdfFile":"/f/d.pdf"}"#).unwrap();
        assert_eq!(book.kind(), BookKind::Ebook);
        assert_eq!(book.detail_path(), "/ebooks/e1");
        assert_eq!(BasketItem::from_book(&book, 1).kind, BookKind::Ebook);
    }

    #[test]
    fn test_declared_type_wins_over_media_fields() {
        let book: Book = serde_json::from_str(r#"{"_id":"t1","title":"Atlas","type":"textbook","pdfFile":"/f/a.pdf"}"#).unwrap();
        assert_eq!(book.kind(), BookKind::Textbook);
        let plain: Book = serde_json::from_str(r#"{"_id":"t2","title":"Algebra"}"#).unwrap();
        assert_eq!(plain.kind(), BookKind::Textbook);
    }

    #[test]
    fn test_book_kind_aliases() {
        let kind: BookKind = serde_json::from_str(r#""digital""#).unwrap();
        assert_eq!(kind, BookKind::Ebook);
        let kind: BookKind = serde_json::from_str(r#""physical""#).unwrap();
        assert_eq!(kind, BookKind::Textbook);
        assert_eq!(BookKind::Audiobook.as_str().parse::<BookKind>(), Ok(BookKind::Audiobook));
        assert!("vinyl".parse::<BookKind>().is_err());
    }

    #[test]
    fn test_in_stock() {
        let mut book: Book = serde_json::from_str(r#"{"id":"1","title":"Calculus","stock":0}"#).unwrap();
        assert!(!book.in_stock());
        book.declared_kind = Some(BookKind::Ebook);
        assert!(book.in_stock());
        assert_eq!(book.detail_path(), "/ebooks/1");
    }

    #[test]
    fn test_user_role_defaults_to_user() {
        let user: User = serde_json::from_str(r#"{"_id":"u1","username":"ana","email":"a@b.c"}"#).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_dashboard_tolerates_missing_fields() {
        let stats: DashboardStats = serde_json::from_str(r#"{"totalUsers": 12, "topBooks": [{"title":"Dune","sold":3}]}"#).unwrap();
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.top_books[0].revenue, 0.0);
    }

    #[test]
    fn test_new_product_omits_empty_optionals() {
        let product = NewProduct {
            title: "Dune".into(),
            author: "Herbert".into(),
            price: 9.5,
            kind: BookKind::Ebook,
            ..Default::default()
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["type"], "ebook");
        assert!(json.get("stock").is_none());
        assert!(json.get("coverUrl").is_none());
    }

    #[test]
    fn test_new_audiobook_carries_media_fields() {
        let product = NewProduct {
            title: "A".into(),
            author: "B".into(),
            price: 1.0,
            kind: BookKind::Audiobook,
            audio_url: Some("/audio/a.mp3".into()),
            narrator: Some("N".into()),
            duration_minutes: Some(90),
            subject: Some("Physics".into()),
            stock: Some(3),
            ..Default::default()
        }
        .retain_kind_fields();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["audioUrl"], "/audio/a.mp3");
        assert_eq!(json["narrator"], "N");
        assert_eq!(json["durationMinutes"], 90);
        assert!(json.get("subject").is_none());
        assert!(json.get("stock").is_none());

        // What the server echoes back parses as the same product line
        let book: Book = serde_json::from_value(serde_json::json!({
            "_id": "x", "title": "A", "audioUrl": "/audio/a.mp3", "durationMinutes": 90
        }))
        .unwrap();
        assert_eq!(book.kind(), BookKind::Audiobook);
        assert_eq!(book.audio_url, product.audio_url);
    }

    #[test]
    fn test_new_textbook_keeps_catalog_fields() {
        let product = NewProduct {
            title: "Algebra".into(),
            author: "Euler".into(),
            price: 20.0,
            kind: BookKind::Textbook,
            subject: Some("Maths".into()),
            grade: Some("10".into()),
            isbn: Some("978-1".into()),
            condition: Some("used".into()),
            stock: Some(4),
            pdf_url: Some("/f/x.pdf".into()),
            ..Default::default()
        }
        .retain_kind_fields();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["subject"], "Maths");
        assert_eq!(json["grade"], "10");
        assert_eq!(json["isbn"], "978-1");
        assert_eq!(json["condition"], "used");
        assert_eq!(json["stock"], 4);
        assert!(json.get("pdfUrl").is_none());
    }
}
