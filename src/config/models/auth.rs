//! Authorization configuration

use crate::auth::rbac::PageKey;
use serde::{Deserialize, Serialize};

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Surface unknown roles as errors instead of silently denying.
    /// Meant for development builds; production should fail closed.
    #[serde(default)]
    pub strict_roles: bool,
    /// Emit a debug event for every authorization decision
    #[serde(default)]
    pub log_decisions: bool,
    /// Page shown after sign-in
    #[serde(default = "default_landing_page")]
    pub landing_page: PageKey,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            strict_roles: false,
            log_decisions: false,
            landing_page: default_landing_page(),
        }
    }
}

fn default_landing_page() -> PageKey {
    PageKey::Dashboard
}
