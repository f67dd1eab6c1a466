//! User registration and login endpoints

use axum::{extract::State, Json};

use super::LenientJson;
use crate::{
    error::AppResult,
    models::user::{Credentials, UserResponse},
    AppState,
};

/// Register a new user
#[utoipa::path(
    post,
    path = "/users/register",
    tag = "users",
    request_body = Credentials,
    responses(
        (status = 200, description = "User registered", body = UserResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    LenientJson(credentials): LenientJson<Credentials>,
) -> Json<UserResponse> {
    let user = state.services.users.register(credentials).await;
    Json(UserResponse {
        message: "User registered successfully".to_string(),
        user,
    })
}

/// Log in as a registered user
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "users",
    request_body = Credentials,
    responses(
        (status = 200, description = "Login successful", body = UserResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    LenientJson(credentials): LenientJson<Credentials>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.login(&credentials).await?;
    Ok(Json(UserResponse {
        message: "Login successful".to_string(),
        user,
    }))
}
