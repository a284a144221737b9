// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Student dashboard endpoints.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::Auth;
use crate::dashboard::{Application, Reminder, StatsResponse};
use crate::state::AppState;

/// Response for GET /api/student/applications/
#[derive(Debug, Serialize, ToSchema)]
pub struct ApplicationsResponse {
    pub applications: Vec<Application>,
}

/// Response for GET /api/student/reminders/
#[derive(Debug, Serialize, ToSchema)]
pub struct RemindersResponse {
    pub reminders: Vec<Reminder>,
}

/// Student dashboard stats.
#[utoipa::path(
    get,
    path = "/api/student/dashboard/",
    tag = "Student",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Dashboard stats", body = StatsResponse),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn dashboard(Auth(_user): Auth, State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        stats: state.dashboards.student_stats(),
    })
}

/// The student's placement applications.
#[utoipa::path(
    get,
    path = "/api/student/applications/",
    tag = "Student",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Application list", body = ApplicationsResponse),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn applications(
    Auth(_user): Auth,
    State(state): State<AppState>,
) -> Json<ApplicationsResponse> {
    Json(ApplicationsResponse {
        applications: state.dashboards.student_applications(),
    })
}

/// The student's upcoming reminders.
#[utoipa::path(
    get,
    path = "/api/student/reminders/",
    tag = "Student",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Reminder list", body = RemindersResponse),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn reminders(
    Auth(_user): Auth,
    State(state): State<AppState>,
) -> Json<RemindersResponse> {
    Json(RemindersResponse {
        reminders: state.dashboards.student_reminders(),
    })
}
