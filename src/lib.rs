// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Campus Portal API - Placement Portal Backend
//!
//! This crate provides the backend for the campus placement portal:
//! Supabase bearer-token authentication, per-user profile registration, and
//! role-scoped dashboard reads for students, mentors, and the placement
//! cell.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Authentication (Supabase JWT)
//! - `dashboard` - Dashboard data provider
//! - `storage` - Profile persistence (redb)

pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod state;
pub mod storage;
