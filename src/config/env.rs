//! `HR_CONSOLE_*` environment overrides

use super::Config;
use crate::utils::error::{ConsoleError, Result};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "HR_CONSOLE_";

impl Config {
    /// Apply `HR_CONSOLE_*` overrides read through `lookup`.
    ///
    /// Only variables that are set (and non-empty) replace the current value,
    /// so a flag can be switched off as well as on.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(&format!("{}{}", ENV_PREFIX, name)).filter(|value| !value.is_empty())
        };

        if let Some(strict) = parse_flag("STRICT_ROLES", var("STRICT_ROLES"))? {
            self.rbac.strict_roles = strict;
        }
        if let Some(log_decisions) = parse_flag("LOG_DECISIONS", var("LOG_DECISIONS"))? {
            self.rbac.log_decisions = log_decisions;
        }
        if let Some(page) = var("LANDING_PAGE") {
            self.rbac.landing_page = page.parse().map_err(|_| {
                ConsoleError::config(format!("{}LANDING_PAGE: unknown page '{}'", ENV_PREFIX, page))
            })?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = parse_flag("LOG_JSON", var("LOG_JSON"))? {
            self.logging.json = json;
        }

        Ok(())
    }
}

fn parse_flag(name: &str, value: Option<String>) -> Result<Option<bool>> {
    let Some(value) = value else {
        return Ok(None);
    };

    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConsoleError::config(format!(
            "{}{}: expected a boolean, got '{}'",
            ENV_PREFIX, name, value
        ))),
    }
}
