// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Profile registration and current-user endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    auth::{Auth, Role},
    error::ApiError,
    state::AppState,
    storage::{ProfileFields, StoredProfile},
};

/// Request body for POST /api/auth/register-profile/
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterProfileRequest {
    /// Requested portal role (must be one of the fixed set)
    #[serde(default)]
    pub role: Option<String>,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Contact email; falls back to the token's email claim when omitted
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form metadata document
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
}

/// Response for POST /api/auth/register-profile/
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterProfileResponse {
    pub profile: StoredProfile,
    /// Whether this call created the profile (201) or replaced it (200)
    pub created: bool,
}

/// Response for GET /api/auth/me/
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentUserResponse {
    /// Authenticated subject id
    pub supabase_id: String,
    /// Email claim from the token
    pub email: Option<String>,
    /// Registered role when a profile exists, else the token's role claim
    pub role: Option<String>,
    /// Stored profile; null until the user registers
    pub profile: Option<StoredProfile>,
}

/// Register (or re-register) the caller's profile.
///
/// Upserts the single profile record keyed by the authenticated subject id:
/// the first call creates it, later calls replace the mutable fields while
/// keeping the creation timestamp.
#[utoipa::path(
    post,
    path = "/api/auth/register-profile/",
    tag = "Auth",
    security(("bearer" = [])),
    request_body = RegisterProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = RegisterProfileResponse),
        (status = 200, description = "Profile updated", body = RegisterProfileResponse),
        (status = 400, description = "Invalid role or missing email"),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn register_profile(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<RegisterProfileRequest>,
) -> Result<(StatusCode, Json<RegisterProfileResponse>), ApiError> {
    let role = request
        .role
        .as_deref()
        .and_then(Role::from_str)
        .ok_or_else(|| ApiError::bad_request("Invalid role."))?;

    // Empty strings count as absent.
    let email = request
        .email
        .filter(|e| !e.is_empty())
        .or(user.email)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::bad_request("Email is required."))?;

    let (profile, created) = state.profiles.upsert(
        &user.supabase_id,
        ProfileFields {
            email,
            role,
            first_name: request.first_name,
            last_name: request.last_name,
            metadata: request.metadata,
        },
    )?;

    tracing::info!(
        supabase_id = %profile.supabase_id,
        role = %profile.role,
        created,
        "profile registered"
    );

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(RegisterProfileResponse { profile, created })))
}

/// Get the caller's identity and stored profile.
///
/// A missing profile is the "not yet registered" state, not an error: the
/// response then carries the token's own email/role claims and a null
/// profile. When a profile exists its role wins over the token's role claim.
#[utoipa::path(
    get,
    path = "/api/auth/me/",
    tag = "Auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user information", body = CurrentUserResponse),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn current_user(
    Auth(user): Auth,
    State(state): State<AppState>,
) -> Result<Json<CurrentUserResponse>, ApiError> {
    let profile = state.profiles.get(&user.supabase_id)?;
    let role = profile
        .as_ref()
        .map(|p| p.role.to_string())
        .or(user.role);

    Ok(Json(CurrentUserResponse {
        supabase_id: user.supabase_id,
        email: user.email,
        role,
        profile,
    }))
}
