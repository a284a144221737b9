// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::config::{ANON_KEY_ENV, VERIFY_SIGNATURES_ENV};
use crate::dashboard::DashboardSource;
use crate::storage::ProfileDatabase;

/// Authentication configuration.
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared decode secret; authentication fails when unset
    pub decode_secret: Option<String>,
    /// Whether to verify token signatures (off by default)
    pub verify_signatures: bool,
}

impl AuthConfig {
    /// Load the auth configuration from the environment.
    pub fn from_env() -> Self {
        let decode_secret = std::env::var(ANON_KEY_ENV).ok().filter(|s| !s.is_empty());
        let verify_signatures = std::env::var(VERIFY_SIGNATURES_ENV)
            .map(|v| matches!(v.as_str(), "true" | "1"))
            .unwrap_or(false);
        Self {
            decode_secret,
            verify_signatures,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<ProfileDatabase>,
    pub dashboards: Arc<dyn DashboardSource>,
    pub auth_config: AuthConfig,
}

impl AppState {
    pub fn new(profiles: ProfileDatabase, dashboards: impl DashboardSource) -> Self {
        Self {
            profiles: Arc::new(profiles),
            dashboards: Arc::new(dashboards),
            auth_config: AuthConfig::from_env(),
        }
    }

    pub fn with_auth_config(mut self, auth_config: AuthConfig) -> Self {
        self.auth_config = auth_config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::StaticDashboards;
    use tempfile::TempDir;

    #[test]
    fn with_auth_config_overrides_env_derived_settings() {
        let dir = TempDir::new().unwrap();
        let db = ProfileDatabase::open(&dir.path().join("profiles.redb")).unwrap();

        let state = AppState::new(db, StaticDashboards).with_auth_config(AuthConfig {
            decode_secret: Some("secret".to_string()),
            verify_signatures: true,
        });

        assert_eq!(state.auth_config.decode_secret.as_deref(), Some("secret"));
        assert!(state.auth_config.verify_signatures);
    }
}
