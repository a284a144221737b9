// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr, path::PathBuf};

use tracing_subscriber::EnvFilter;

use campus_portal_api::api::router;
use campus_portal_api::config::{
    ANON_KEY_ENV, DATA_DIR_ENV, DEFAULT_DATA_DIR, PROFILE_DB_FILE, VERIFY_SIGNATURES_ENV,
};
use campus_portal_api::dashboard::StaticDashboards;
use campus_portal_api::state::{AppState, AuthConfig};
use campus_portal_api::storage::ProfileDatabase;

#[tokio::main]
async fn main() {
    init_tracing();

    let auth_config = AuthConfig::from_env();
    if auth_config.decode_secret.is_none() {
        tracing::warn!("{ANON_KEY_ENV} is not set; every bearer token will be rejected");
    }
    if !auth_config.verify_signatures {
        tracing::warn!(
            "JWT signature verification is DISABLED; set {VERIFY_SIGNATURES_ENV}=true \
             on any exposed deployment"
        );
    }

    let data_dir = env::var(DATA_DIR_ENV).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    let db_path = PathBuf::from(data_dir).join(PROFILE_DB_FILE);
    let profiles = ProfileDatabase::open(&db_path).expect("Failed to open profile database");

    let state = AppState::new(profiles, StaticDashboards).with_auth_config(auth_config);
    let app = router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!("Campus Portal API listening on http://{addr} (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    tracing::info!("shutdown signal received");
}
