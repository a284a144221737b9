// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Supabase JWT authentication for the Campus Portal API.
//!
//! ## Auth Flow
//!
//! 1. Frontend authenticates the user with Supabase
//! 2. Frontend sends `Authorization: Bearer <Supabase JWT>`
//! 3. Backend:
//!    - Decodes the claim payload (by default WITHOUT verifying the
//!      signature; see below)
//!    - Extracts `sub` (or `user_id`) → canonical `supabase_id`
//!    - Extracts optional `email` and `role`/`user_role` claims
//!
//! ## Security
//!
//! The upstream portal decodes tokens with signature verification disabled
//! and this service preserves that behavior by default so the two deploy
//! interchangeably. It means any well-formed token is trusted. Set
//! `SUPABASE_VERIFY_SIGNATURES=true` to enforce HS256 verification against
//! `SUPABASE_ANON_KEY`; the server logs a warning at startup while
//! verification is off.
//!
//! Requests without a bearer token are anonymous; all non-health routes
//! reject anonymous callers with 401.

pub mod claims;
pub mod error;
pub mod extractor;
pub mod roles;

pub use claims::{AuthenticatedUser, SupabaseClaims};
pub use error::AuthError;
pub use extractor::Auth;
pub use roles::Role;
