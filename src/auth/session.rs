//! Identity source for the current console session

use crate::core::models::user::types::{User, UserRole};
use parking_lot::RwLock;
use tracing::info;

use super::rbac::{self, Capability, PageKey};

/// Currently signed-in user, if any.
///
/// Holds identity only. Every authorization query reads the latest user and
/// evaluates the policy afresh, so a role change is visible on the next call.
/// Without a user every query answers `false`.
#[derive(Debug, Default)]
pub struct Session {
    user: RwLock<Option<User>>,
}

impl Session {
    /// Session with nobody signed in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session already holding a user
    pub fn with_user(user: User) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// Replace the current identity
    pub fn sign_in(&self, user: User) {
        info!(user_id = %user.id, role = %user.role, "User signed in");
        *self.user.write() = Some(user);
    }

    /// Drop the current identity
    pub fn sign_out(&self) {
        if let Some(user) = self.user.write().take() {
            info!(user_id = %user.id, "User signed out");
        }
    }

    /// Snapshot of the current user
    pub fn current_user(&self) -> Option<User> {
        self.user.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// Role of the current user
    pub fn role(&self) -> Option<UserRole> {
        self.user.read().as_ref().map(|user| user.role)
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.role().is_some_and(|current| rbac::has_role(current, role))
    }

    pub fn has_any_role(&self, allowed: &[UserRole]) -> bool {
        self.role()
            .is_some_and(|current| rbac::has_any_role(current, allowed))
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.role()
            .is_some_and(|current| rbac::has_capability(current, capability))
    }

    pub fn can_access_page(&self, page: PageKey) -> bool {
        self.role()
            .is_some_and(|current| rbac::can_access_page(current, page))
    }
}
