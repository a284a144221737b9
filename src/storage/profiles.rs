// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Embedded profile database backed by redb (pure Rust, ACID).
//!
//! ## Table Layout
//!
//! - `profiles`: supabase_id → serialized StoredProfile (JSON bytes)
//!
//! The upsert runs inside a single write transaction. redb serializes
//! writers, so concurrent registrations for the same subject id cannot
//! produce duplicate records; the loser of the race simply replaces the
//! winner's mutable fields.

use std::path::Path;

use chrono::{DateTime, Utc};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::auth::Role;

/// Primary table: supabase_id → serialized StoredProfile (JSON bytes).
const PROFILES: TableDefinition<&str, &[u8]> = TableDefinition::new("profiles");

// =============================================================================
// Error Type
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProfileDbError {
    #[error("redb error: {0}")]
    Redb(#[from] redb::Error),

    #[error("redb database error: {0}")]
    RedbDatabase(#[from] redb::DatabaseError),

    #[error("redb transaction error: {0}")]
    RedbTransaction(#[from] redb::TransactionError),

    #[error("redb table error: {0}")]
    RedbTable(#[from] redb::TableError),

    #[error("redb storage error: {0}")]
    RedbStorage(#[from] redb::StorageError),

    #[error("redb commit error: {0}")]
    RedbCommit(#[from] redb::CommitError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type ProfileDbResult<T> = Result<T, ProfileDbError>;

// =============================================================================
// Records
// =============================================================================

/// Persisted per-user profile, keyed by the external Supabase subject id.
///
/// At most one profile exists per subject id. `supabase_id` and
/// `created_at` are immutable once written; everything else is replaced
/// wholesale on re-registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredProfile {
    /// External subject id issued by Supabase (natural key)
    pub supabase_id: String,
    /// Contact email
    pub email: String,
    /// Registered portal role
    pub role: Role,
    /// Given name (may be empty)
    #[serde(default)]
    pub first_name: String,
    /// Family name (may be empty)
    #[serde(default)]
    pub last_name: String,
    /// Free-form metadata document supplied at registration
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    /// Set on first registration, preserved across re-registrations
    pub created_at: DateTime<Utc>,
    /// Refreshed on every registration
    pub updated_at: DateTime<Utc>,
}

/// Mutable fields written by an upsert.
#[derive(Debug, Clone)]
pub struct ProfileFields {
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub metadata: Option<Value>,
}

// =============================================================================
// ProfileDatabase
// =============================================================================

/// Embedded ACID profile database.
pub struct ProfileDatabase {
    db: Database,
}

impl ProfileDatabase {
    /// Open (or create) the database at the given path.
    pub fn open(path: &Path) -> ProfileDbResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let db = Database::create(path)?;

        // Pre-create the table so later read transactions don't fail
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PROFILES)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Insert or replace the profile for a subject id.
    ///
    /// Returns the resulting profile and `true` when this call created it.
    /// `created_at` survives a replace; `updated_at` always refreshes.
    pub fn upsert(
        &self,
        supabase_id: &str,
        fields: ProfileFields,
    ) -> ProfileDbResult<(StoredProfile, bool)> {
        let write_txn = self.db.begin_write()?;
        let (profile, created) = {
            let mut table = write_txn.open_table(PROFILES)?;

            let existing_created_at = match table.get(supabase_id)? {
                Some(guard) => {
                    Some(serde_json::from_slice::<StoredProfile>(guard.value())?.created_at)
                }
                None => None,
            };

            let now = Utc::now();
            let profile = StoredProfile {
                supabase_id: supabase_id.to_string(),
                email: fields.email,
                role: fields.role,
                first_name: fields.first_name,
                last_name: fields.last_name,
                metadata: fields.metadata,
                created_at: existing_created_at.unwrap_or(now),
                updated_at: now,
            };

            let json = serde_json::to_vec(&profile)?;
            table.insert(supabase_id, json.as_slice())?;
            (profile, existing_created_at.is_none())
        };
        write_txn.commit()?;
        Ok((profile, created))
    }

    /// Look up a profile by subject id.
    pub fn get(&self, supabase_id: &str) -> ProfileDbResult<Option<StoredProfile>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PROFILES)?;
        match table.get(supabase_id)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }
}
