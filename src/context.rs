// ABOUTME: Caller identity capability consumed by the authorization decorator
// ABOUTME: Provides CallerContext trait and a fixed-identity implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Caller Context
//!
//! The authorization decorator needs to know who is calling and with which
//! role. Both come from whatever authentication layer fronts this crate
//! (JWT middleware, session store), abstracted behind [`CallerContext`] so
//! the decorator stays transport-agnostic.

use uuid::Uuid;

use crate::errors::AuthorizationError;
use crate::permissions::UserRole;

/// Capability exposing the current caller's identity and role.
pub trait CallerContext: Send + Sync {
    /// Identity of the current caller.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::Unauthenticated`] when no caller
    /// identity is present.
    fn current_user_id(&self) -> Result<Uuid, AuthorizationError>;

    /// Role of the current caller.
    ///
    /// Defaults to [`UserRole::User`] when no role claim is present; this
    /// accessor never fails.
    fn current_user_role(&self) -> UserRole;
}

/// Fixed-identity caller context.
///
/// Useful for single-user embeddings and tests; production deployments
/// implement [`CallerContext`] over their per-request authentication state.
#[derive(Debug, Clone)]
pub struct StaticCallerContext {
    user_id: Option<Uuid>,
    role: UserRole,
}

impl StaticCallerContext {
    /// Context for an authenticated regular user
    #[must_use]
    pub const fn user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            role: UserRole::User,
        }
    }

    /// Context for an authenticated admin
    #[must_use]
    pub const fn admin(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            role: UserRole::Admin,
        }
    }

    /// Context with no caller identity
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            user_id: None,
            role: UserRole::User,
        }
    }
}

impl CallerContext for StaticCallerContext {
    fn current_user_id(&self) -> Result<Uuid, AuthorizationError> {
        self.user_id.ok_or(AuthorizationError::Unauthenticated)
    }

    fn current_user_role(&self) -> UserRole {
        self.role
    }
}
