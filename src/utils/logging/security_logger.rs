//! Security-aware logging utilities

use tracing::{debug, error};

/// Structured events for authorization decisions, under the `security` target
pub struct SecurityLogger;

impl SecurityLogger {
    /// Log an authorization decision
    pub fn log_authz_event(
        role: &str,
        resource: &str,
        action: &str,
        granted: bool,
        reason: Option<&str>,
    ) {
        if granted {
            debug!(
                target: "security",
                role,
                resource,
                action,
                granted,
                "Authorization granted"
            );
        } else {
            debug!(
                target: "security",
                role,
                resource,
                action,
                granted,
                reason = reason.unwrap_or("unspecified"),
                "Authorization denied"
            );
        }
    }

    /// Log a role value that could not be resolved
    pub fn log_unknown_role(role: &str, strict: bool) {
        // Cap what we echo back from untrusted input
        let safe_role = role.chars().take(64).collect::<String>();
        error!(
            target: "security",
            role = %safe_role,
            strict,
            "Unknown role encountered"
        );
    }
}
