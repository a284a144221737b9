// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Dashboard Data Module
//!
//! Role-scoped dashboard content behind the [`DashboardSource`] trait.
//! The shipped [`StaticDashboards`] implementation returns fixed demo data;
//! swapping in a query-backed implementation changes nothing in routing or
//! handlers.

use serde::Serialize;
use utoipa::ToSchema;

/// A dashboard stat value: either a plain count or preformatted text
/// ("6.2 LPA", "82%").
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum StatValue {
    Count(i64),
    Text(String),
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Count(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

/// Direction of a stat's recent movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// One labeled dashboard metric.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Stat {
    pub label: String,
    pub value: StatValue,
    pub delta: String,
    pub trend: Trend,
}

/// A student's placement application.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Application {
    pub id: u32,
    pub role: String,
    pub status: String,
    #[serde(rename = "statusColor")]
    pub status_color: String,
    pub company: String,
    pub updated: String,
}

/// An upcoming to-do shown on the student dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Reminder {
    pub title: String,
    pub date: String,
}

/// A mentor's feedback note.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FeedbackNote {
    pub text: String,
}

/// A scheduled placement drive.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Drive {
    pub company: String,
    pub date: String,
    pub stage: String,
}

/// Stats payload shared by the three role dashboards.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub stats: Vec<Stat>,
}

/// Provider of dashboard content.
///
/// Handlers only see this trait, so the static demo data can later be
/// replaced by real queries without touching the HTTP surface.
pub trait DashboardSource: Send + Sync + 'static {
    fn student_stats(&self) -> Vec<Stat>;
    fn student_applications(&self) -> Vec<Application>;
    fn student_reminders(&self) -> Vec<Reminder>;
    fn mentor_stats(&self) -> Vec<Stat>;
    fn mentor_feedback(&self) -> Vec<FeedbackNote>;
    fn placement_stats(&self) -> Vec<Stat>;
    fn placement_drives(&self) -> Vec<Drive>;
}

/// The portal's built-in demo content.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticDashboards;

fn stat(label: &str, value: impl Into<StatValue>, delta: &str, trend: Trend) -> Stat {
    Stat {
        label: label.to_string(),
        value: value.into(),
        delta: delta.to_string(),
        trend,
    }
}

impl DashboardSource for StaticDashboards {
    fn student_stats(&self) -> Vec<Stat> {
        vec![
            stat("Applications", 12, "+2 this week", Trend::Up),
            stat("Interviews", 4, "1 pending", Trend::Neutral),
            stat("Offers", 1, "Stable", Trend::Neutral),
            stat("Profile Score", "82%", "+5%", Trend::Up),
        ]
    }

    fn student_applications(&self) -> Vec<Application> {
        let rows = [
            (1, "Frontend Intern", "Pending", "#fbbf24", "DevSoft", "2d"),
            (2, "Data Analyst", "Interview", "#34d399", "InsightX", "4d"),
            (3, "ML Engineer", "Draft", "#94a3b8", "NeuroEdge", "1w"),
        ];
        rows.into_iter()
            .map(|(id, role, status, status_color, company, updated)| Application {
                id,
                role: role.to_string(),
                status: status.to_string(),
                status_color: status_color.to_string(),
                company: company.to_string(),
                updated: updated.to_string(),
            })
            .collect()
    }

    fn student_reminders(&self) -> Vec<Reminder> {
        let rows = [
            ("Resume Update", "Today"),
            ("Portfolio Review", "Fri"),
            ("Mock Interview", "Mon"),
        ];
        rows.into_iter()
            .map(|(title, date)| Reminder {
                title: title.to_string(),
                date: date.to_string(),
            })
            .collect()
    }

    fn mentor_stats(&self) -> Vec<Stat> {
        vec![
            stat("Assigned Students", 18, "+3", Trend::Up),
            stat("Active Sessions", 5, "2 today", Trend::Neutral),
            stat("Reviews Completed", 42, "+6", Trend::Up),
            stat("Avg Progress", "74%", "+2%", Trend::Up),
        ]
    }

    fn mentor_feedback(&self) -> Vec<FeedbackNote> {
        let rows = [
            "Resume structure improved by 15% clarity score.",
            "Added ML project to portfolio enhancing visibility.",
            "Need to practice system design fundamentals.",
        ];
        rows.into_iter()
            .map(|text| FeedbackNote {
                text: text.to_string(),
            })
            .collect()
    }

    fn placement_stats(&self) -> Vec<Stat> {
        vec![
            stat("Active Students", 320, "+12", Trend::Up),
            stat("Placed", 142, "+9", Trend::Up),
            stat("Avg Package", "6.2 LPA", "+0.4", Trend::Up),
            stat("Upcoming Drives", 5, "2 this week", Trend::Neutral),
        ]
    }

    fn placement_drives(&self) -> Vec<Drive> {
        let rows = [
            ("TechCorp", "14 Feb", "Round 1"),
            ("DataWorks", "17 Feb", "Aptitude"),
            ("CloudNova", "21 Feb", "Registration"),
        ];
        rows.into_iter()
            .map(|(company, date, stage)| Drive {
                company: company.to_string(),
                date: date.to_string(),
                stage: stage.to_string(),
            })
            .collect()
    }
}
