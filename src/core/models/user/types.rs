//! Core user types and enums

use crate::utils::error::ConsoleError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated console account as returned by the REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier
    pub id: String,
    /// Login email
    pub email: String,
    /// Authorization role
    pub role: UserRole,
    /// Linked employee record, present for employee accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Last login timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

/// User role
///
/// Serialized with the short identifiers the API uses (`user`, `hr`,
/// `admin`); the long forms are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UserRole {
    /// Base employee, sees only their own records
    #[serde(rename = "user", alias = "employee")]
    Employee,
    /// HR manager
    #[serde(rename = "hr", alias = "hr-manager")]
    HrManager,
    /// Administrator
    #[serde(rename = "admin", alias = "administrator")]
    Administrator,
}

impl UserRole {
    /// Every role, lowest privilege first
    pub const ALL: [UserRole; 3] = [
        UserRole::Employee,
        UserRole::HrManager,
        UserRole::Administrator,
    ];

    /// Canonical identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => "employee",
            UserRole::HrManager => "hr-manager",
            UserRole::Administrator => "administrator",
        }
    }

    /// Identifier used on the wire by the REST API
    pub fn wire_name(&self) -> &'static str {
        match self {
            UserRole::Employee => "user",
            UserRole::HrManager => "hr",
            UserRole::Administrator => "admin",
        }
    }

    /// Human readable name shown in badges and user tables
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Employee => "Employee",
            UserRole::HrManager => "HR Manager",
            UserRole::Administrator => "Administrator",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" | "user" => Ok(UserRole::Employee),
            "hr-manager" | "hr" => Ok(UserRole::HrManager),
            "administrator" | "admin" => Ok(UserRole::Administrator),
            _ => Err(ConsoleError::unknown_role(s)),
        }
    }
}

impl User {
    /// Create a new user
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role,
            employee_id: None,
            last_login: None,
        }
    }

    /// Link the account to an employee record
    pub fn with_employee(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }

    /// Check if user has exactly this role
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }

    /// Employee the self-service pages are scoped to.
    ///
    /// `None` for HR and admin accounts, whose attendance and payroll views
    /// cover every employee.
    pub fn self_service_scope(&self) -> Option<&str> {
        match self.role {
            UserRole::Employee => self.employee_id.as_deref(),
            UserRole::HrManager | UserRole::Administrator => None,
        }
    }

    /// Update last login
    pub fn update_last_login(&mut self) {
        self.last_login = Some(Utc::now());
    }
}
