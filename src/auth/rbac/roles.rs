//! Role allowlist checks

use crate::core::models::user::types::UserRole;

/// Whether the current role is exactly `role`
pub fn has_role(current: UserRole, role: UserRole) -> bool {
    current == role
}

/// Whether the current role is in the allowlist
pub fn has_any_role(current: UserRole, allowed: &[UserRole]) -> bool {
    allowed.contains(&current)
}

/// Roles allowed into HR-only sections
pub const STAFF_ROLES: &[UserRole] = &[UserRole::HrManager, UserRole::Administrator];

/// Roles allowed into administration-only sections
pub const ADMIN_ROLES: &[UserRole] = &[UserRole::Administrator];

/// Every role
pub const ALL_ROLES: &[UserRole] = &UserRole::ALL;
