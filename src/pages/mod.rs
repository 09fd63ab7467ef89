//! Pages
//!
//! One module per screen; each is mounted by a route in `app.rs`.

mod account;
pub mod admin;
mod audiobooks;
mod auth;
mod books;
mod cart;
mod ebooks;
mod home;
mod info;
mod textbooks;

pub use account::AccountPage;
pub use admin::{AdminDashboardPage, AdminProductsPage, AdminUsersPage};
pub use audiobooks::{AudiobookDetailPage, AudiobooksPage};
pub use auth::{LoginPage, RegisterPage};
pub use cart::CartPage;
pub use ebooks::{EbookDetailPage, EbooksPage};
pub use home::HomePage;
pub use info::{ContactPage, FaqPage, NotFoundPage, TermsPage};
pub use textbooks::{TextbookDetailPage, TextbooksPage};
