// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Placement cell dashboard endpoints.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::Auth;
use crate::dashboard::{Drive, StatsResponse};
use crate::state::AppState;

/// Response for GET /api/placement/drives/
#[derive(Debug, Serialize, ToSchema)]
pub struct DrivesResponse {
    pub drives: Vec<Drive>,
}

/// Placement cell dashboard stats.
#[utoipa::path(
    get,
    path = "/api/placement/dashboard/",
    tag = "Placement",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Dashboard stats", body = StatsResponse),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn dashboard(Auth(_user): Auth, State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        stats: state.dashboards.placement_stats(),
    })
}

/// Upcoming placement drives.
#[utoipa::path(
    get,
    path = "/api/placement/drives/",
    tag = "Placement",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Drive list", body = DrivesResponse),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn drives(Auth(_user): Auth, State(state): State<AppState>) -> Json<DrivesResponse> {
    Json(DrivesResponse {
        drives: state.dashboards.placement_drives(),
    })
}
