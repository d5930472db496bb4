//! Auth handlers — register, login, refresh, logout, password reset, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use contactly_core::error::AppError;

use crate::dto::request::{
    LoginRequest, RefreshRequest, RegisterRequest, ResetPasswordRequest, SendResetEmailRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse, SessionResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .auth_service
        .register(contactly_service::RegisterRequest {
            name: req.name,
            email: req.email,
            password: req.password,
            phone: req.phone,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(user))),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<SessionResponse>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let session = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(SessionResponse::from(session))))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> ApiResult<Json<ApiResponse<SessionResponse>>> {
    let session = state
        .auth_service
        .refresh(req.session_id, &req.refresh_token)
        .await?;

    Ok(Json(ApiResponse::ok(SessionResponse::from(session))))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> ApiResult<StatusCode> {
    state.auth_service.logout(auth.session.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/auth/send-reset-email
pub async fn send_reset_email(
    State(state): State<AppState>,
    Json(req): Json<SendResetEmailRequest>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state.auth_service.request_password_reset(&req.email).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Reset password email has been successfully sent".to_string(),
    })))
}

/// POST /api/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .auth_service
        .reset_password(&req.token, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password has been successfully reset".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::ok(UserResponse::from(auth.user)))
}
