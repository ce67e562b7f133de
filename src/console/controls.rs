//! Action-level controls (buttons, menu items)

use crate::auth::Session;
use crate::auth::rbac::{Capability, has_capability};
use crate::core::models::user::types::UserRole;
use serde::Serialize;

/// A console control whose presence depends on a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    AddEmployee,
    EditEmployee,
    DeleteEmployee,
    ApproveLeave,
    RejectLeave,
    ManageAttendance,
    ManagePayroll,
    ManageDepartments,
    ManageReports,
    ManageSettings,
    AddUser,
    EditUser,
    DeleteUser,
}

/// Whether a control is rendered.
///
/// A denied control is removed, never shown-then-rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlState {
    Visible,
    Hidden,
}

impl Control {
    pub const ALL: [Control; 13] = [
        Control::AddEmployee,
        Control::EditEmployee,
        Control::DeleteEmployee,
        Control::ApproveLeave,
        Control::RejectLeave,
        Control::ManageAttendance,
        Control::ManagePayroll,
        Control::ManageDepartments,
        Control::ManageReports,
        Control::ManageSettings,
        Control::AddUser,
        Control::EditUser,
        Control::DeleteUser,
    ];

    /// Capability gating this control
    pub fn required_capability(&self) -> Capability {
        match self {
            Control::AddEmployee => Capability::CanCreateEmployees,
            Control::EditEmployee => Capability::CanEditEmployees,
            Control::DeleteEmployee => Capability::CanDeleteEmployees,
            Control::ApproveLeave | Control::RejectLeave => Capability::CanManageLeaves,
            Control::ManageAttendance => Capability::CanManageAttendance,
            Control::ManagePayroll => Capability::CanManagePayroll,
            Control::ManageDepartments => Capability::CanManageDepartments,
            Control::ManageReports => Capability::CanManageReports,
            Control::ManageSettings => Capability::CanManageSettings,
            Control::AddUser | Control::EditUser | Control::DeleteUser => {
                Capability::CanManageUsers
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Control::AddEmployee => "Add Employee",
            Control::EditEmployee => "Edit Employee",
            Control::DeleteEmployee => "Delete Employee",
            Control::ApproveLeave => "Approve",
            Control::RejectLeave => "Reject",
            Control::ManageAttendance => "Mark Attendance",
            Control::ManagePayroll => "Process Payroll",
            Control::ManageDepartments => "Add Department",
            Control::ManageReports => "Generate Report",
            Control::ManageSettings => "Save Settings",
            Control::AddUser => "Add User",
            Control::EditUser => "Edit User",
            Control::DeleteUser => "Delete User",
        }
    }
}

/// Rendering state of a control for a role
pub fn control_state(role: UserRole, control: Control) -> ControlState {
    if has_capability(role, control.required_capability()) {
        ControlState::Visible
    } else {
        ControlState::Hidden
    }
}

/// Rendering state of a control for the session; hidden when signed out
pub fn control_state_for(session: &Session, control: Control) -> ControlState {
    session
        .role()
        .map(|role| control_state(role, control))
        .unwrap_or(ControlState::Hidden)
}

/// Controls rendered for a role
pub fn visible_controls(role: UserRole) -> Vec<Control> {
    Control::ALL
        .into_iter()
        .filter(|control| control_state(role, *control) == ControlState::Visible)
        .collect()
}
