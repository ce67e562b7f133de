//! Role-Based Access Control (RBAC) system
//!
//! A static role to permission table plus the derivation functions that
//! decide what each role may see and do. Everything here is pure: the same
//! role always yields the same answer and no decision is cached.

mod pages;
mod permissions;
mod roles;
mod system;
mod types;

pub use pages::{accessible_pages, can_access_page, can_access_page_named, is_self_service};
pub use permissions::{has_capability, has_capability_named, permissions_for, permissions_for_name};
pub use roles::{ADMIN_ROLES, ALL_ROLES, STAFF_ROLES, has_any_role, has_role};
pub use system::RbacSystem;
pub use types::{Capability, PageKey, PermissionCheck, PermissionSet};
