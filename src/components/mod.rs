//! UI Components
//!
//! Reusable Leptos components.

mod add_to_basket_button;
mod book_card;
mod delete_confirm_button;
mod guards;
mod layout;
mod review_section;
mod star_rating;
mod status;
mod toast_host;
mod wishlist_button;

pub use add_to_basket_button::AddToBasketButton;
pub use book_card::{cover_src, BookCard, BookGrid};
pub use delete_confirm_button::DeleteConfirmButton;
pub use guards::{RequireAdmin, RequireAuth};
pub use layout::Layout;
pub use review_section::ReviewSection;
pub use star_rating::{StarInput, StarRating};
pub use status::{spawn_load, EmptyState, ErrorBanner, LoadState, Spinner};
pub use toast_host::ToastHost;
pub use wishlist_button::WishlistButton;
