//! RBAC system core functionality
//!
//! The free functions in this module tree answer questions about a known
//! [`UserRole`]. [`RbacSystem`] wraps them for role values that arrive as
//! strings (API payloads, stored sessions) and applies the configured
//! failure policy: unknown roles fail closed, or surface `UnknownRole`
//! when `strict_roles` is on.

use crate::config::RbacConfig;
use crate::core::models::user::types::UserRole;
use crate::utils::error::Result;
use crate::utils::logging::SecurityLogger;
use tracing::info;

use super::pages::{can_access_page, can_access_page_named, is_self_service};
use super::permissions::{has_capability, permissions_for};
use super::types::{Capability, PageKey, PermissionCheck, PermissionSet};

/// RBAC system applying the configured policy to authorization queries
#[derive(Debug, Clone, Default)]
pub struct RbacSystem {
    /// RBAC configuration
    pub(super) config: RbacConfig,
}

impl RbacSystem {
    /// Create a new RBAC system
    pub fn new(config: &RbacConfig) -> Self {
        info!(
            strict_roles = config.strict_roles,
            "Initializing RBAC system"
        );

        Self {
            config: config.clone(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &RbacConfig {
        &self.config
    }

    /// Resolve a role string.
    ///
    /// Returns `Ok(None)` for an unknown role unless strict mode is on.
    pub fn resolve_role(&self, role: &str) -> Result<Option<UserRole>> {
        match role.parse::<UserRole>() {
            Ok(role) => Ok(Some(role)),
            Err(e) => {
                SecurityLogger::log_unknown_role(role, self.config.strict_roles);
                if self.config.strict_roles {
                    Err(e)
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Permission set for a role string; deny-all for unknown roles
    pub fn permissions_for_raw(&self, role: &str) -> Result<PermissionSet> {
        Ok(self
            .resolve_role(role)?
            .map(|role| *permissions_for(role))
            .unwrap_or_else(PermissionSet::deny_all))
    }

    /// Capability check for a role string
    pub fn has_capability_raw(&self, role: &str, capability: Capability) -> Result<bool> {
        Ok(self
            .resolve_role(role)?
            .is_some_and(|role| self.check_capability(role, capability).granted))
    }

    /// Page check for a role string and raw page key
    pub fn can_access_page_raw(&self, role: &str, page: &str) -> Result<bool> {
        Ok(self
            .resolve_role(role)?
            .is_some_and(|role| self.allows_page(role, page)))
    }

    /// Page check for a resolved role and raw page key; unknown keys are denied
    pub fn allows_page(&self, role: UserRole, page: &str) -> bool {
        let granted = can_access_page_named(role, page);
        if self.config.log_decisions {
            let reason = (!granted).then_some("page not accessible");
            SecurityLogger::log_authz_event(role.as_str(), page, "view", granted, reason);
        }
        granted
    }

    /// Detailed capability check
    pub fn check_capability(&self, role: UserRole, capability: Capability) -> PermissionCheck {
        let check = if has_capability(role, capability) {
            PermissionCheck::granted()
        } else {
            PermissionCheck::denied(format!("Missing capability: {}", capability))
        };

        if self.config.log_decisions {
            SecurityLogger::log_authz_event(
                role.as_str(),
                capability.as_str(),
                "use",
                check.granted,
                check.denial_reason.as_deref(),
            );
        }
        check
    }

    /// Detailed page check
    pub fn check_page(&self, role: UserRole, page: PageKey) -> PermissionCheck {
        let check = if !can_access_page(role, page) {
            PermissionCheck::denied(format!("Role {} cannot access page {}", role, page))
        } else if is_self_service(role, page) {
            PermissionCheck::self_service()
        } else {
            PermissionCheck::granted()
        };

        if self.config.log_decisions {
            SecurityLogger::log_authz_event(
                role.as_str(),
                page.as_str(),
                if check.self_service { "view_own" } else { "view" },
                check.granted,
                check.denial_reason.as_deref(),
            );
        }
        check
    }
}
