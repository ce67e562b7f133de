//! # HR Console
//!
//! Authorization model for the HR administration console: a static
//! role to permission table, the page visibility policy (including the
//! self-service override for attendance and payroll), role allowlists,
//! and the navigation and action gating built on top of them.
//!
//! The model is advisory. It decides what the console renders; the REST
//! API the console talks to is responsible for real enforcement.
//!
//! ## Quick Start
//!
//! ```rust
//! use hr_console::auth::rbac::{self, Capability, PageKey};
//! use hr_console::core::models::UserRole;
//!
//! assert!(rbac::can_access_page(UserRole::Employee, PageKey::Payroll));
//! assert!(!rbac::has_capability(UserRole::Employee, Capability::CanViewPayroll));
//! assert!(!rbac::can_access_page(UserRole::HrManager, PageKey::Users));
//! ```
//!
//! ## Sessions
//!
//! ```rust
//! use hr_console::auth::{RouteDecision, Session};
//! use hr_console::auth::rbac::PageKey;
//! use hr_console::core::models::{User, UserRole};
//!
//! let session = Session::anonymous();
//! assert_eq!(session.resolve_route(PageKey::Dashboard), RouteDecision::Login);
//!
//! session.sign_in(User::new("1", "hr@example.com", UserRole::HrManager));
//! assert_eq!(
//!     session.resolve_route(PageKey::Employees),
//!     RouteDecision::Render(PageKey::Employees)
//! );
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod console;
pub mod core;
pub mod utils;

// Re-export main types
pub use auth::rbac::{Capability, PageKey, PermissionSet, RbacSystem};
pub use auth::{RouteDecision, Session};
pub use config::Config;
pub use crate::core::models::{User, UserRole};
pub use utils::error::{ConsoleError, Result};
