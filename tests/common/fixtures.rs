//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use hr_console::auth::Session;
use hr_console::core::models::{User, UserRole};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Factory for creating test users
pub struct UserFactory;

impl UserFactory {
    /// Create a user with the given role
    pub fn with_role(role: UserRole) -> User {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        User::new(
            id.to_string(),
            format!("{}-{}@example.com", role.wire_name(), id),
            role,
        )
    }

    /// Create an employee account linked to an employee record
    pub fn employee() -> User {
        let user = Self::with_role(UserRole::Employee);
        let employee_id = format!("emp-{}", user.id);
        user.with_employee(employee_id)
    }

    pub fn hr_manager() -> User {
        Self::with_role(UserRole::HrManager)
    }

    pub fn administrator() -> User {
        Self::with_role(UserRole::Administrator)
    }

    /// Session already signed in as the given user
    pub fn session(user: User) -> Session {
        Session::with_user(user)
    }
}
