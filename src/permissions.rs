// ABOUTME: Role-based permission types for ownership-scoped access control
// ABOUTME: Defines UserRole consumed by the caller context and access decorator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

use serde::{Deserialize, Serialize};

/// Role of an authenticated caller.
///
/// Admins bypass per-owner checks in the access decorator; regular users
/// are scoped to resources they own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular user, scoped to owned resources
    #[default]
    User,
    /// Administrator, unrestricted access
    Admin,
}

impl UserRole {
    /// Parse a role from a claim string, defaulting to `User` for anything
    /// unrecognized. Missing or malformed role claims never fail.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }

    /// Check whether this role bypasses ownership checks
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_lossy_defaults_to_user() {
        assert_eq!(UserRole::from_str_lossy("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_lossy("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::from_str_lossy("user"), UserRole::User);
        assert_eq!(UserRole::from_str_lossy("moderator"), UserRole::User);
        assert_eq!(UserRole::from_str_lossy(""), UserRole::User);
    }
}
