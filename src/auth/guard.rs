//! Route and section guards
//!
//! A page is rendered only when three checks pass in order: someone is
//! signed in, the role may access the page, and the role is on the page's
//! section allowlist (if it has one). Any failure produces a whole-page
//! outcome, never a partial view.

use crate::core::models::user::types::UserRole;
use serde::Serialize;
use tracing::debug;

use super::rbac::{ADMIN_ROLES, PageKey, STAFF_ROLES, can_access_page, has_any_role};
use super::session::Session;

/// Outcome of navigating to a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "page", rename_all = "snake_case")]
pub enum RouteDecision {
    /// No identity; show the sign-in entry point
    Login,
    /// Show the generic access-denied fallback
    Denied,
    /// Render the page body
    Render(PageKey),
}

/// Outcome of a role allowlist guard around a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardOutcome {
    /// No identity; render nothing
    Hidden,
    /// Render the access-denied notice instead of the section
    Denied,
    Allowed,
}

/// Role allowlist applied inside a page once page access has passed
pub fn section_guard(page: PageKey) -> Option<&'static [UserRole]> {
    match page {
        PageKey::Employees | PageKey::Departments | PageKey::Reports | PageKey::Settings => {
            Some(STAFF_ROLES)
        }
        PageKey::Users => Some(ADMIN_ROLES),
        PageKey::Dashboard
        | PageKey::Profile
        | PageKey::Attendance
        | PageKey::Leaves
        | PageKey::Payroll => None,
    }
}

/// Resolve navigation for an optional role
pub fn resolve_route(role: Option<UserRole>, page: PageKey) -> RouteDecision {
    let Some(role) = role else {
        return RouteDecision::Login;
    };

    if !can_access_page(role, page) {
        debug!(%role, %page, "Page access denied");
        return RouteDecision::Denied;
    }

    match section_guard(page) {
        Some(allowed) if !has_any_role(role, allowed) => {
            debug!(%role, %page, "Section guard denied");
            RouteDecision::Denied
        }
        _ => RouteDecision::Render(page),
    }
}

/// Resolve navigation for a raw page key; unknown keys are denied
pub fn resolve_route_named(role: Option<UserRole>, page: &str) -> RouteDecision {
    if role.is_none() {
        return RouteDecision::Login;
    }

    match page.parse::<PageKey>() {
        Ok(page) => resolve_route(role, page),
        Err(_) => RouteDecision::Denied,
    }
}

/// Evaluate a role allowlist guard
pub fn role_guard(role: Option<UserRole>, allowed: &[UserRole]) -> GuardOutcome {
    match role {
        None => GuardOutcome::Hidden,
        Some(role) if has_any_role(role, allowed) => GuardOutcome::Allowed,
        Some(_) => GuardOutcome::Denied,
    }
}

impl Session {
    /// Resolve navigation for the current user
    pub fn resolve_route(&self, page: PageKey) -> RouteDecision {
        resolve_route(self.role(), page)
    }

    /// Evaluate a role allowlist guard for the current user
    pub fn role_guard(&self, allowed: &[UserRole]) -> GuardOutcome {
        role_guard(self.role(), allowed)
    }
}
