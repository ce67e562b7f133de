//! Authorization configuration validators

use super::trait_def::Validate;
use crate::auth::rbac::can_access_page;
use crate::config::models::*;
use crate::core::models::UserRole;
use tracing::debug;

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating RBAC configuration");

        // Every role lands here after sign-in, so it must never be a denied page
        if let Some(role) = UserRole::ALL
            .into_iter()
            .find(|role| !can_access_page(*role, self.landing_page))
        {
            return Err(format!(
                "Landing page '{}' is not accessible to role {}",
                self.landing_page, role
            ));
        }

        Ok(())
    }
}
