//! RBAC type definitions

use crate::utils::error::ConsoleError;
use serde::{Deserialize, Serialize};

/// A named boolean permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    CanViewAllEmployees,
    CanCreateEmployees,
    CanEditEmployees,
    CanDeleteEmployees,
    CanViewPayroll,
    CanManagePayroll,
    CanViewReports,
    CanManageReports,
    CanViewAttendance,
    CanManageAttendance,
    CanViewLeaves,
    /// Approve or reject leave requests
    CanManageLeaves,
    CanViewDepartments,
    CanManageDepartments,
    CanViewSettings,
    CanManageSettings,
    CanManageUsers,
}

impl Capability {
    /// Every capability, in permission set field order
    pub const ALL: [Capability; 17] = [
        Capability::CanViewAllEmployees,
        Capability::CanCreateEmployees,
        Capability::CanEditEmployees,
        Capability::CanDeleteEmployees,
        Capability::CanViewPayroll,
        Capability::CanManagePayroll,
        Capability::CanViewReports,
        Capability::CanManageReports,
        Capability::CanViewAttendance,
        Capability::CanManageAttendance,
        Capability::CanViewLeaves,
        Capability::CanManageLeaves,
        Capability::CanViewDepartments,
        Capability::CanManageDepartments,
        Capability::CanViewSettings,
        Capability::CanManageSettings,
        Capability::CanManageUsers,
    ];

    /// camelCase name, as used by the console and the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::CanViewAllEmployees => "canViewAllEmployees",
            Capability::CanCreateEmployees => "canCreateEmployees",
            Capability::CanEditEmployees => "canEditEmployees",
            Capability::CanDeleteEmployees => "canDeleteEmployees",
            Capability::CanViewPayroll => "canViewPayroll",
            Capability::CanManagePayroll => "canManagePayroll",
            Capability::CanViewReports => "canViewReports",
            Capability::CanManageReports => "canManageReports",
            Capability::CanViewAttendance => "canViewAttendance",
            Capability::CanManageAttendance => "canManageAttendance",
            Capability::CanViewLeaves => "canViewLeaves",
            Capability::CanManageLeaves => "canManageLeaves",
            Capability::CanViewDepartments => "canViewDepartments",
            Capability::CanManageDepartments => "canManageDepartments",
            Capability::CanViewSettings => "canViewSettings",
            Capability::CanManageSettings => "canManageSettings",
            Capability::CanManageUsers => "canManageUsers",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|capability| capability.as_str() == s)
            .ok_or_else(|| ConsoleError::unknown_capability(s))
    }
}

/// The full table of capabilities for one role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub can_view_all_employees: bool,
    pub can_create_employees: bool,
    pub can_edit_employees: bool,
    pub can_delete_employees: bool,
    /// Bulk payroll access; employees still see their own payroll
    pub can_view_payroll: bool,
    pub can_manage_payroll: bool,
    pub can_view_reports: bool,
    pub can_manage_reports: bool,
    /// Bulk attendance access; employees still see their own attendance
    pub can_view_attendance: bool,
    pub can_manage_attendance: bool,
    pub can_view_leaves: bool,
    pub can_manage_leaves: bool,
    pub can_view_departments: bool,
    pub can_manage_departments: bool,
    pub can_view_settings: bool,
    pub can_manage_settings: bool,
    pub can_manage_users: bool,
}

impl PermissionSet {
    /// A set granting nothing, used when a role cannot be resolved
    pub const fn deny_all() -> Self {
        Self {
            can_view_all_employees: false,
            can_create_employees: false,
            can_edit_employees: false,
            can_delete_employees: false,
            can_view_payroll: false,
            can_manage_payroll: false,
            can_view_reports: false,
            can_manage_reports: false,
            can_view_attendance: false,
            can_manage_attendance: false,
            can_view_leaves: false,
            can_manage_leaves: false,
            can_view_departments: false,
            can_manage_departments: false,
            can_view_settings: false,
            can_manage_settings: false,
            can_manage_users: false,
        }
    }

    /// Value of a single capability
    pub fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::CanViewAllEmployees => self.can_view_all_employees,
            Capability::CanCreateEmployees => self.can_create_employees,
            Capability::CanEditEmployees => self.can_edit_employees,
            Capability::CanDeleteEmployees => self.can_delete_employees,
            Capability::CanViewPayroll => self.can_view_payroll,
            Capability::CanManagePayroll => self.can_manage_payroll,
            Capability::CanViewReports => self.can_view_reports,
            Capability::CanManageReports => self.can_manage_reports,
            Capability::CanViewAttendance => self.can_view_attendance,
            Capability::CanManageAttendance => self.can_manage_attendance,
            Capability::CanViewLeaves => self.can_view_leaves,
            Capability::CanManageLeaves => self.can_manage_leaves,
            Capability::CanViewDepartments => self.can_view_departments,
            Capability::CanManageDepartments => self.can_manage_departments,
            Capability::CanViewSettings => self.can_view_settings,
            Capability::CanManageSettings => self.can_manage_settings,
            Capability::CanManageUsers => self.can_manage_users,
        }
    }

    /// Capabilities this set grants, in field order
    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.get(*capability))
            .collect()
    }

    /// Whether nothing is granted
    pub fn is_empty(&self) -> bool {
        self.granted().is_empty()
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::deny_all()
    }
}

/// Identifier of a navigable console section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    Dashboard,
    Profile,
    Employees,
    Departments,
    Attendance,
    Leaves,
    Payroll,
    Reports,
    Settings,
    Users,
}

impl PageKey {
    pub const ALL: [PageKey; 10] = [
        PageKey::Dashboard,
        PageKey::Profile,
        PageKey::Employees,
        PageKey::Departments,
        PageKey::Attendance,
        PageKey::Leaves,
        PageKey::Payroll,
        PageKey::Reports,
        PageKey::Settings,
        PageKey::Users,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "dashboard",
            PageKey::Profile => "profile",
            PageKey::Employees => "employees",
            PageKey::Departments => "departments",
            PageKey::Attendance => "attendance",
            PageKey::Leaves => "leaves",
            PageKey::Payroll => "payroll",
            PageKey::Reports => "reports",
            PageKey::Settings => "settings",
            PageKey::Users => "users",
        }
    }
}

impl std::fmt::Display for PageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PageKey {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKey::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| ConsoleError::unknown_page(s))
    }
}

/// Result of a single authorization decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Whether access is granted
    pub granted: bool,
    /// Granted only through the self-service override
    pub self_service: bool,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

impl PermissionCheck {
    pub(crate) fn granted() -> Self {
        Self {
            granted: true,
            self_service: false,
            denial_reason: None,
        }
    }

    pub(crate) fn self_service() -> Self {
        Self {
            granted: true,
            self_service: true,
            denial_reason: None,
        }
    }

    pub(crate) fn denied(reason: impl Into<String>) -> Self {
        Self {
            granted: false,
            self_service: false,
            denial_reason: Some(reason.into()),
        }
    }
}
