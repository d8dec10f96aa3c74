//! Auth API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::verify_password;
use crate::core::ServerState;
use shared::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

/// POST /api/auth/login
///
/// Checks the credentials against the configured admin account and returns
/// a bearer token. Failures are deliberately indistinguishable.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let config = &state.config;

    if req.username != config.admin_username {
        tracing::warn!(username = %req.username, "login attempt with unknown username");
        return Err(AppError::invalid_credentials());
    }

    let password_valid = verify_password(&req.password, &config.admin_password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

    if !password_valid {
        tracing::warn!(username = %req.username, "login attempt with wrong password");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(&req.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(username = %req.username, "admin logged in");

    Ok(Json(LoginResponse {
        token,
        username: req.username,
        expires_in: state.jwt_service.config.expiration_minutes * 60,
    }))
}
