//! Authorization for the HR console
//!
//! [`rbac`] holds the permission table and the pure policy functions,
//! [`Session`] is the identity source, and the guard functions combine the
//! two into navigation outcomes.
//!
//! These checks are advisory: they decide what the console shows. The
//! REST API behind the console performs the real enforcement.

pub mod guard;
pub mod rbac;
pub mod session;


pub use guard::{
    GuardOutcome, RouteDecision, resolve_route, resolve_route_named, role_guard, section_guard,
};
pub use rbac::{Capability, PageKey, PermissionCheck, PermissionSet, RbacSystem};
pub use session::Session;
