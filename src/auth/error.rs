// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Authentication error type.
///
/// Every variant maps to 401: anonymous requests to protected routes and
/// broken tokens are not distinguished beyond the `code` field.
#[derive(Debug)]
pub enum AuthError {
    /// No usable `Authorization: Bearer <token>` header on a protected route
    MissingCredentials,
    /// Decode secret not configured in the environment
    MissingSecret,
    /// Token payload carries neither `sub` nor `user_id`
    MissingSubject,
    /// Token could not be decoded; carries the underlying decode error text
    InvalidToken(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    detail: String,
    code: String,
}

impl AuthError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "missing_credentials",
            AuthError::MissingSecret => "missing_secret",
            AuthError::MissingSubject => "missing_subject",
            AuthError::InvalidToken(_) => "invalid_token",
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingCredentials => {
                write!(f, "Authentication credentials were not provided.")
            }
            AuthError::MissingSecret => write!(f, "Supabase anon key not configured"),
            AuthError::MissingSubject => write!(f, "Supabase token missing subject"),
            AuthError::InvalidToken(msg) => write!(f, "Invalid token: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(AuthErrorBody {
            detail: self.to_string(),
            code: self.code().to_string(),
        });
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
