// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for authenticated users.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```
//!
//! ## Authentication Modes
//!
//! - **Default mode**: the token payload is decoded WITHOUT signature
//!   verification. This reproduces the upstream portal's trust boundary and
//!   must not be used on an exposed deployment.
//! - **Verified mode** (`SUPABASE_VERIFY_SIGNATURES=true`): full HS256
//!   verification against the configured secret.
//!
//! A request with no `Authorization` header (or one without the `Bearer `
//! prefix) is anonymous, not an error; `Auth` turns anonymous into 401 for
//! the protected routes.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use super::{AuthError, AuthenticatedUser, SupabaseClaims};
use crate::state::{AppState, AuthConfig};

/// Extractor that requires an authenticated user.
///
/// # Example
///
/// ```rust,ignore
/// async fn current_user(
///     Auth(user): Auth,
///     State(state): State<AppState>,
/// ) -> Result<Json<CurrentUserResponse>, ApiError> {
///     // user.supabase_id is the authenticated subject id
/// }
/// ```
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match authenticate(&parts.headers, &state.auth_config)? {
            Some(user) => Ok(Auth(user)),
            None => Err(AuthError::MissingCredentials),
        }
    }
}

/// Run the bearer-token authentication flow against a request's headers.
///
/// `Ok(None)` means the request is anonymous: no `Authorization` header, or
/// a value without the `Bearer ` prefix. Callers decide whether anonymous
/// access is permitted. Errors cover the three failure modes: secret not
/// configured, undecodable token, and a payload with no subject.
pub(crate) fn authenticate(
    headers: &HeaderMap,
    config: &AuthConfig,
) -> Result<Option<AuthenticatedUser>, AuthError> {
    let Some(header) = headers.get(AUTHORIZATION) else {
        tracing::trace!("no authorization header, proceeding anonymously");
        return Ok(None);
    };
    let Ok(value) = header.to_str() else {
        tracing::debug!("authorization header is not valid UTF-8, proceeding anonymously");
        return Ok(None);
    };
    let Some(token) = value.strip_prefix("Bearer ") else {
        tracing::debug!("authorization header is not a bearer token, proceeding anonymously");
        return Ok(None);
    };

    let secret = config.decode_secret.as_deref().ok_or_else(|| {
        tracing::error!("{} is not set, rejecting bearer token", crate::config::ANON_KEY_ENV);
        AuthError::MissingSecret
    })?;

    let claims = if config.verify_signatures {
        decode_verified(token, secret)?
    } else {
        decode_unverified(token)?
    };

    let user = AuthenticatedUser::from_claims(claims).ok_or_else(|| {
        tracing::debug!("token payload carries no subject claim");
        AuthError::MissingSubject
    })?;

    tracing::debug!(supabase_id = %user.supabase_id, "authenticated bearer token");
    Ok(Some(user))
}

/// Decode the claim payload without checking the signature.
///
/// SECURITY: anyone can mint a token this mode accepts. The startup log
/// warns while it is active.
fn decode_unverified(token: &str) -> Result<SupabaseClaims, AuthError> {
    let token_data = jsonwebtoken::dangerous::insecure_decode::<SupabaseClaims>(token)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
    Ok(token_data.claims)
}

/// Decode with full HS256 verification against the shared secret.
///
/// Audience validation is disabled: Supabase sets `aud` to the project role
/// rather than this service.
fn decode_verified(token: &str, secret: &str) -> Result<SupabaseClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let token_data = decode::<SupabaseClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
    Ok(token_data.claims)
}
