//! REST API Client
//!
//! Typed bindings to the BookCompass API, organized by domain.
//! Every call is a single independent request: no retry, no caching.

mod admin;
mod auth;
mod books;
mod reviews;
mod wishlist;

pub use admin::*;
pub use auth::*;
pub use books::*;
pub use reviews::*;
pub use wishlist::*;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{ApiError, ApiResult};

thread_local! {
    static CLIENT: reqwest::Client = reqwest::Client::new();
}

fn client() -> reqwest::Client {
    CLIENT.with(Clone::clone)
}

/// List endpoints answer either a bare array or an object wrapping one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListResponse<T> {
    Plain(Vec<T>),
    Wrapped {
        #[serde(
            alias = "books",
            alias = "users",
            alias = "products",
            alias = "reviews",
            alias = "wishlist",
            alias = "data"
        )]
        items: Vec<T>,
    },
}

impl<T> ListResponse<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Plain(items) | ListResponse::Wrapped { items } => items,
        }
    }
}

/// Single-record endpoints sometimes wrap the record too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ItemResponse<T> {
    Wrapped {
        #[serde(alias = "book", alias = "user", alias = "product", alias = "review", alias = "data")]
        item: T,
    },
    Plain(T),
}

impl<T> ItemResponse<T> {
    fn into_inner(self) -> T {
        match self {
            ItemResponse::Plain(item) | ItemResponse::Wrapped { item } => item,
        }
    }
}

fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Execute a GET request.
async fn get<T: DeserializeOwned>(path: &str, token: Option<&str>) -> ApiResult<T> {
    log::debug!("GET {}", path);
    let request = authorize(client().get(config::api_url(path)), token);
    handle_response(path, request.send().await?).await
}

async fn get_list<T: DeserializeOwned>(path: &str, token: Option<&str>) -> ApiResult<Vec<T>> {
    get::<ListResponse<T>>(path, token).await.map(ListResponse::into_vec)
}

async fn get_item<T: DeserializeOwned>(path: &str, token: Option<&str>) -> ApiResult<T> {
    get::<ItemResponse<T>>(path, token).await.map(ItemResponse::into_inner)
}

/// Execute a POST request with a JSON body.
async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B, token: Option<&str>) -> ApiResult<T> {
    log::debug!("POST {}", path);
    let request = authorize(client().post(config::api_url(path)).json(body), token);
    handle_response(path, request.send().await?).await
}

/// POST returning a (possibly wrapped) record.
async fn post_item<T: DeserializeOwned, B: Serialize>(path: &str, body: &B, token: &str) -> ApiResult<T> {
    post::<ItemResponse<T>, B>(path, body, Some(token)).await.map(ItemResponse::into_inner)
}

/// POST where only the status matters.
async fn post_unit<B: Serialize>(path: &str, body: &B, token: Option<&str>) -> ApiResult<()> {
    log::debug!("POST {}", path);
    let request = authorize(client().post(config::api_url(path)).json(body), token);
    let response = request.send().await?;
    if response.status().is_success() {
        return Ok(());
    }
    Err(parse_error(path, response).await)
}

/// Execute a DELETE request.
async fn delete(path: &str, token: Option<&str>) -> ApiResult<()> {
    log::debug!("DELETE {}", path);
    let request = authorize(client().delete(config::api_url(path)), token);
    let response = request.send().await?;
    if response.status().is_success() {
        return Ok(());
    }
    Err(parse_error(path, response).await)
}

async fn handle_response<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> ApiResult<T> {
    if !response.status().is_success() {
        return Err(parse_error(path, response).await);
    }
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        log::error!("{}: unexpected response shape: {}", path, e);
        ApiError::Parse(e.to_string())
    })
}

async fn parse_error(path: &str, response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    log::warn!("{} failed: {}", path, err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;

    #[test]
    fn test_list_response_plain_array() {
        let json = r#"[{"_id":"1","title":"A"},{"_id":"2","title":"B"}]"#;
        let list: ListResponse<Book> = serde_json::from_str(json).unwrap();
        assert_eq!(list.into_vec().len(), 2);
    }

    #[test]
    fn test_list_response_wrapped() {
        let json = r#"{"books":[{"_id":"1","title":"A"}],"count":1}"#;
        let list: ListResponse<Book> = serde_json::from_str(json).unwrap();
        let books = list.into_vec();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "A");
    }

    #[test]
    fn test_item_response_both_shapes() {
        let wrapped: ItemResponse<Book> = serde_json::from_str(r#"{"book":{"_id":"7","title":"Wrapped"}}"#).unwrap();
        assert_eq!(wrapped.into_inner().id, "7");
        let plain: ItemResponse<Book> = serde_json::from_str(r#"{"_id":"8","title":"Plain"}"#).unwrap();
        assert_eq!(plain.into_inner().title, "Plain");
    }
}
