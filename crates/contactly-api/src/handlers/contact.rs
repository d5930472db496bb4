//! Contact handlers — list, get, create, update, delete.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use contactly_core::error::AppError;
use contactly_entity::contact::{CreateContact, UpdateContact};

use crate::dto::request::{CreateContactRequest, UpdateContactRequest};
use crate::dto::response::{ApiResponse, ContactResponse, PaginatedResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ContactListParams};
use crate::state::AppState;

/// GET /api/contacts
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ContactListParams>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<ContactResponse>>>> {
    let (page, sort) = params.into_parts()?;

    let contacts = state
        .contact_service
        .list(auth.user.id, page, sort)
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from(contacts))))
}

/// GET /api/contacts/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<ContactResponse>>> {
    let contact = state.contact_service.get(auth.user.id, id).await?;
    Ok(Json(ApiResponse::ok(ContactResponse::from(contact))))
}

/// POST /api/contacts
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateContactRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<ContactResponse>>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let contact = state
        .contact_service
        .create(CreateContact {
            user_id: auth.user.id,
            name: req.name,
            phone_number: req.phone_number,
            email: req.email,
            is_favourite: req.is_favourite,
            contact_type: req.contact_type,
            photo: req.photo,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ContactResponse::from(contact))),
    ))
}

/// PATCH /api/contacts/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateContactRequest>,
) -> ApiResult<Json<ApiResponse<ContactResponse>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let contact = state
        .contact_service
        .update(
            auth.user.id,
            id,
            UpdateContact {
                name: req.name,
                phone_number: req.phone_number,
                email: req.email,
                is_favourite: req.is_favourite,
                contact_type: req.contact_type,
                photo: req.photo,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(ContactResponse::from(contact))))
}

/// DELETE /api/contacts/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.contact_service.delete(auth.user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
