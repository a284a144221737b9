// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Storage Module
//!
//! Persistent storage for user profiles, backed by an embedded redb
//! database under `DATA_DIR`. One file, one table; the database serializes
//! write transactions, which is what makes the registration upsert atomic.

pub mod profiles;

pub use profiles::{ProfileDatabase, ProfileDbError, ProfileDbResult, ProfileFields, StoredProfile};
