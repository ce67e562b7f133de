//! Sidebar navigation and page titles

use crate::auth::Session;
use crate::auth::rbac::{ADMIN_ROLES, ALL_ROLES, PageKey, STAFF_ROLES, can_access_page, has_any_role};
use crate::core::models::user::types::UserRole;
use serde::Serialize;

/// Sidebar section an entry is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavGroup {
    Personal,
    Management,
    Administration,
}

impl NavGroup {
    pub const ALL: [NavGroup; 3] = [
        NavGroup::Personal,
        NavGroup::Management,
        NavGroup::Administration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavGroup::Personal => "Personal",
            NavGroup::Management => "Management",
            NavGroup::Administration => "Administration",
        }
    }
}

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub page: PageKey,
    /// Roles the entry is listed for, on top of page access
    pub allowed_roles: &'static [UserRole],
    pub group: NavGroup,
}

const EMPLOYEE_ONLY: &[UserRole] = &[UserRole::Employee];

/// Every sidebar entry, in display order
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        page: PageKey::Dashboard,
        allowed_roles: ALL_ROLES,
        group: NavGroup::Personal,
    },
    NavItem {
        title: "My Profile",
        page: PageKey::Profile,
        allowed_roles: EMPLOYEE_ONLY,
        group: NavGroup::Personal,
    },
    NavItem {
        title: "Employees",
        page: PageKey::Employees,
        allowed_roles: STAFF_ROLES,
        group: NavGroup::Management,
    },
    NavItem {
        title: "Departments",
        page: PageKey::Departments,
        allowed_roles: STAFF_ROLES,
        group: NavGroup::Management,
    },
    NavItem {
        title: "Attendance",
        page: PageKey::Attendance,
        allowed_roles: ALL_ROLES,
        group: NavGroup::Management,
    },
    NavItem {
        title: "Leave Requests",
        page: PageKey::Leaves,
        allowed_roles: ALL_ROLES,
        group: NavGroup::Management,
    },
    NavItem {
        title: "Payroll",
        page: PageKey::Payroll,
        allowed_roles: ALL_ROLES,
        group: NavGroup::Management,
    },
    NavItem {
        title: "Reports",
        page: PageKey::Reports,
        allowed_roles: STAFF_ROLES,
        group: NavGroup::Administration,
    },
    NavItem {
        title: "User Management",
        page: PageKey::Users,
        allowed_roles: ADMIN_ROLES,
        group: NavGroup::Administration,
    },
    NavItem {
        title: "Settings",
        page: PageKey::Settings,
        allowed_roles: STAFF_ROLES,
        group: NavGroup::Administration,
    },
];

/// One non-empty sidebar group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub group: NavGroup,
    pub label: &'static str,
    pub items: Vec<NavItem>,
}

impl NavItem {
    /// Whether this entry is listed for a role
    pub fn is_visible_to(&self, role: UserRole) -> bool {
        has_any_role(role, self.allowed_roles) && can_access_page(role, self.page)
    }
}

/// Entries listed for a role, in display order
pub fn visible_items(role: UserRole) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.is_visible_to(role))
        .copied()
        .collect()
}

/// Grouped sidebar for a role; empty groups are omitted
pub fn sidebar(role: UserRole) -> Vec<NavSection> {
    let items = visible_items(role);

    NavGroup::ALL
        .into_iter()
        .filter_map(|group| {
            let items: Vec<NavItem> = items
                .iter()
                .filter(|item| item.group == group)
                .copied()
                .collect();
            (!items.is_empty()).then(|| NavSection {
                group,
                label: group.label(),
                items,
            })
        })
        .collect()
}

/// Grouped sidebar for the session; empty when nobody is signed in
pub fn sidebar_for(session: &Session) -> Vec<NavSection> {
    session.role().map(sidebar).unwrap_or_default()
}

/// Header title for a page.
///
/// Self-service pages read "My ..." for employees.
pub fn page_title(role: Option<UserRole>, page: PageKey) -> &'static str {
    let own = role == Some(UserRole::Employee);
    match page {
        PageKey::Dashboard => "Dashboard",
        PageKey::Profile => "My Profile",
        PageKey::Employees => "Employees",
        PageKey::Departments => "Departments",
        PageKey::Users => "User Management",
        PageKey::Attendance if own => "My Attendance",
        PageKey::Attendance => "Attendance",
        PageKey::Leaves if own => "My Leave Requests",
        PageKey::Leaves => "Leave Requests",
        PageKey::Payroll if own => "My Payroll",
        PageKey::Payroll => "Payroll",
        PageKey::Reports => "Reports",
        PageKey::Settings => "Settings",
    }
}
