//! Admin Endpoints
//!
//! All of these require an admin token; a regular user gets `Forbidden`.

use crate::error::ApiResult;
use crate::models::{Book, DashboardStats, NewProduct, NewUser, User};

pub async fn get_dashboard(token: &str) -> ApiResult<DashboardStats> {
    super::get("/api/admin/dashboard", Some(token)).await
}

// ========================
// Users
// ========================

pub async fn list_users(token: &str) -> ApiResult<Vec<User>> {
    super::get_list("/api/admin/users", Some(token)).await
}

pub async fn create_user(token: &str, user: &NewUser) -> ApiResult<User> {
    super::post_item("/api/admin/users", user, token).await
}

pub async fn delete_user(token: &str, id: &str) -> ApiResult<()> {
    super::delete(&format!("/api/admin/users/{}", id), Some(token)).await
}

// ========================
// Products
// ========================

pub async fn list_products(token: &str) -> ApiResult<Vec<Book>> {
    super::get_list("/api/admin/products", Some(token)).await
}

pub async fn create_product(token: &str, product: &NewProduct) -> ApiResult<Book> {
    super::post_item("/api/admin/products", product, token).await
}

pub async fn delete_product(token: &str, id: &str) -> ApiResult<()> {
    super::delete(&format!("/api/admin/products/{}", id), Some(token)).await
}
