//! Static role to permission table and capability lookups

use crate::core::models::user::types::UserRole;
use crate::utils::error::Result;

use super::types::{Capability, PermissionSet};

/// Base employees only work with their own records
const EMPLOYEE_PERMISSIONS: PermissionSet = PermissionSet {
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
    can_view_leaves: true,
    can_manage_leaves: false,
    can_view_departments: false,
    can_manage_departments: false,
    can_view_settings: false,
    can_manage_settings: false,
    can_manage_users: false,
};

/// HR deactivates rather than deletes, and has no say over system settings or accounts
const HR_MANAGER_PERMISSIONS: PermissionSet = PermissionSet {
    can_view_all_employees: true,
    can_create_employees: true,
    can_edit_employees: true,
    can_delete_employees: false,
    can_view_payroll: true,
    can_manage_payroll: true,
    can_view_reports: true,
    can_manage_reports: true,
    can_view_attendance: true,
    can_manage_attendance: true,
    can_view_leaves: true,
    can_manage_leaves: true,
    can_view_departments: true,
    can_manage_departments: true,
    can_view_settings: true,
    can_manage_settings: false,
    can_manage_users: false,
};

const ADMINISTRATOR_PERMISSIONS: PermissionSet = PermissionSet {
    can_view_all_employees: true,
    can_create_employees: true,
    can_edit_employees: true,
    can_delete_employees: true,
    can_view_payroll: true,
    can_manage_payroll: true,
    can_view_reports: true,
    can_manage_reports: true,
    can_view_attendance: true,
    can_manage_attendance: true,
    can_view_leaves: true,
    can_manage_leaves: true,
    can_view_departments: true,
    can_manage_departments: true,
    can_view_settings: true,
    can_manage_settings: true,
    can_manage_users: true,
};

/// Permission set for a role
pub fn permissions_for(role: UserRole) -> &'static PermissionSet {
    match role {
        UserRole::Employee => &EMPLOYEE_PERMISSIONS,
        UserRole::HrManager => &HR_MANAGER_PERMISSIONS,
        UserRole::Administrator => &ADMINISTRATOR_PERMISSIONS,
    }
}

/// Permission set for a role given by name; fails with `UnknownRole`
pub fn permissions_for_name(role: &str) -> Result<&'static PermissionSet> {
    Ok(permissions_for(role.parse()?))
}

/// Whether a role holds a capability
pub fn has_capability(role: UserRole, capability: Capability) -> bool {
    permissions_for(role).get(capability)
}

/// Whether a role holds a capability given by its camelCase name
pub fn has_capability_named(role: UserRole, capability: &str) -> Result<bool> {
    Ok(has_capability(role, capability.parse()?))
}
