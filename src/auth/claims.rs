// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT claims and the per-request identity built from them.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Claims decoded from a Supabase JWT payload.
///
/// Supabase tokens carry standard OIDC claims plus project-specific ones.
/// Only the fields the portal reads are named; everything else is retained
/// in `extra` so handlers receive the full claim set.
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseClaims {
    /// Subject (canonical Supabase user id)
    #[serde(default)]
    pub sub: Option<String>,

    /// Fallback subject key emitted by some token flows
    #[serde(default)]
    pub user_id: Option<String>,

    /// User's email address
    #[serde(default)]
    pub email: Option<String>,

    /// Role claim (Supabase's own, e.g. `authenticated`)
    #[serde(default)]
    pub role: Option<String>,

    /// Fallback role key set via custom claims
    #[serde(default)]
    pub user_role: Option<String>,

    /// Remaining claims, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SupabaseClaims {
    /// The subject id, under either recognized key.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().or(self.user_id.as_deref())
    }

    /// The role claim, under either recognized key.
    pub fn role_claim(&self) -> Option<&str> {
        self.role.as_deref().or(self.user_role.as_deref())
    }

    /// Rebuild the full payload as a JSON object.
    pub fn to_payload(&self) -> Map<String, Value> {
        let mut payload = self.extra.clone();
        let named = [
            ("sub", &self.sub),
            ("user_id", &self.user_id),
            ("email", &self.email),
            ("role", &self.role),
            ("user_role", &self.user_role),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                payload.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        payload
    }
}

/// Authenticated principal for one request.
///
/// Derived from the bearer token on every request; never persisted. The
/// `role` here is the token's free-form role claim, not a registered
/// profile role.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Canonical Supabase user id (`sub`, or `user_id` as fallback)
    pub supabase_id: String,

    /// Email claim, if present
    pub email: Option<String>,

    /// Role claim (`role`, or `user_role` as fallback), if present
    pub role: Option<String>,

    /// Full decoded claim set
    pub claims: Map<String, Value>,
}

impl AuthenticatedUser {
    /// Build an identity from decoded claims.
    ///
    /// Returns `None` when both recognized subject keys are absent.
    pub fn from_claims(claims: SupabaseClaims) -> Option<Self> {
        let supabase_id = claims.subject()?.to_string();
        Some(Self {
            supabase_id,
            email: claims.email.clone(),
            role: claims.role_claim().map(str::to_string),
            claims: claims.to_payload(),
        })
    }
}
