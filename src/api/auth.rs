//! Auth Endpoints

use crate::error::ApiResult;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, Session};

pub async fn login(email: &str, password: &str) -> ApiResult<Session> {
    let body = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let resp: AuthResponse = super::post("/api/auth/login", &body, None).await?;
    log::info!("logged in as {}", resp.user.email);
    Ok(resp.into())
}

pub async fn register(name: &str, email: &str, password: &str) -> ApiResult<Session> {
    let body = RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let resp: AuthResponse = super::post("/api/auth/register", &body, None).await?;
    log::info!("registered {}", resp.user.email);
    Ok(resp.into())
}
