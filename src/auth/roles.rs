// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Portal roles.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registered role of a portal user.
///
/// Profiles carry exactly one of these. Registration rejects anything
/// outside this set; the free-form role claim inside a Supabase token is a
/// different thing and never parsed into this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Student looking for placements
    Student,
    /// Mentor reviewing student progress
    Mentor,
    /// Recruiting employer
    Employer,
    /// Placement cell staff
    Placement,
    /// Portal administrator
    Admin,
}

impl Role {
    /// Parse a role from its lowercase wire form.
    pub fn from_str(s: &str) -> Option<Role> {
        match s {
            "student" => Some(Role::Student),
            "mentor" => Some(Role::Mentor),
            "employer" => Some(Role::Employer),
            "placement" => Some(Role::Placement),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// The lowercase wire form of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Mentor => "mentor",
            Role::Employer => "employer",
            Role::Placement => "placement",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_every_role() {
        assert_eq!(Role::from_str("student"), Some(Role::Student));
        assert_eq!(Role::from_str("mentor"), Some(Role::Mentor));
        assert_eq!(Role::from_str("employer"), Some(Role::Employer));
        assert_eq!(Role::from_str("placement"), Some(Role::Placement));
        assert_eq!(Role::from_str("admin"), Some(Role::Admin));
    }

    #[test]
    fn from_str_rejects_unknown_and_cased_input() {
        assert_eq!(Role::from_str("Student"), None);
        assert_eq!(Role::from_str("professor"), None);
        assert_eq!(Role::from_str(""), None);
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(Role::Placement.to_string(), "placement");
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn serde_round_trips_lowercase() {
        let json = serde_json::to_string(&Role::Mentor).unwrap();
        assert_eq!(json, r#""mentor""#);
        let role: Role = serde_json::from_str(r#""employer""#).unwrap();
        assert_eq!(role, Role::Employer);
    }
}
