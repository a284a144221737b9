// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Root directory for the profile database | `/data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SUPABASE_ANON_KEY` | JWT decode secret | Required for authentication |
//! | `SUPABASE_VERIFY_SIGNATURES` | `true` enables HS256 signature verification | `false` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the data directory path.
///
/// The profile database file lives at `<DATA_DIR>/profiles.redb`.
///
/// # Default
/// `/data`
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Environment variable name for the Supabase JWT decode secret.
///
/// Authentication fails with a configuration error when unset. With
/// signature verification disabled (the default) the secret is checked for
/// presence but never used to validate tokens.
pub const ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";

/// Environment variable name for the signature verification toggle.
///
/// Unset, or any value other than `true`/`1`, leaves verification OFF: the
/// token payload is decoded without checking its signature. Unsafe outside
/// development.
pub const VERIFY_SIGNATURES_ENV: &str = "SUPABASE_VERIFY_SIGNATURES";

/// Default location of the profile database when `DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "/data";

/// File name of the redb database inside the data directory.
pub const PROFILE_DB_FILE: &str = "profiles.redb";
