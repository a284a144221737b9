// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Mentor dashboard endpoints.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::Auth;
use crate::dashboard::{FeedbackNote, StatsResponse};
use crate::state::AppState;

/// Response for GET /api/mentor/feedback/
#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackResponse {
    pub feedback: Vec<FeedbackNote>,
}

/// Mentor dashboard stats.
#[utoipa::path(
    get,
    path = "/api/mentor/dashboard/",
    tag = "Mentor",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Dashboard stats", body = StatsResponse),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn dashboard(Auth(_user): Auth, State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        stats: state.dashboards.mentor_stats(),
    })
}

/// Recent feedback notes written by the mentor.
#[utoipa::path(
    get,
    path = "/api/mentor/feedback/",
    tag = "Mentor",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Feedback list", body = FeedbackResponse),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn feedback(Auth(_user): Auth, State(state): State<AppState>) -> Json<FeedbackResponse> {
    Json(FeedbackResponse {
        feedback: state.dashboards.mentor_feedback(),
    })
}
