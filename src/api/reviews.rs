//! Review Endpoints

use crate::error::ApiResult;
use crate::models::{NewReview, Review};

fn reviews_path(book_id: &str) -> String {
    format!("/api/reviews/{}/reviews", book_id)
}

pub async fn list_reviews(book_id: &str) -> ApiResult<Vec<Review>> {
    super::get_list(&reviews_path(book_id), None).await
}

pub async fn create_review(token: &str, book_id: &str, review: &NewReview) -> ApiResult<Review> {
    super::post_item(&reviews_path(book_id), review, token).await
}
