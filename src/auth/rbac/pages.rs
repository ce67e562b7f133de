//! Page visibility policy

use crate::core::models::user::types::UserRole;

use super::permissions::has_capability;
use super::types::{Capability, PageKey};

/// Whether a role may see and enter a page
pub fn can_access_page(role: UserRole, page: PageKey) -> bool {
    match page {
        // Settings and profile render role-appropriate content instead of being gated here
        PageKey::Dashboard | PageKey::Profile | PageKey::Settings => true,
        PageKey::Attendance => {
            has_capability(role, Capability::CanViewAttendance) || is_self_service(role, page)
        }
        PageKey::Payroll => {
            has_capability(role, Capability::CanViewPayroll) || is_self_service(role, page)
        }
        PageKey::Employees => has_capability(role, Capability::CanViewAllEmployees),
        PageKey::Departments => has_capability(role, Capability::CanViewDepartments),
        PageKey::Leaves => has_capability(role, Capability::CanViewLeaves),
        PageKey::Reports => has_capability(role, Capability::CanViewReports),
        PageKey::Users => has_capability(role, Capability::CanManageUsers),
    }
}

/// Page check for a raw key; unrecognized keys are not accessible
pub fn can_access_page_named(role: UserRole, page: &str) -> bool {
    page.parse::<PageKey>()
        .map(|page| can_access_page(role, page))
        .unwrap_or(false)
}

/// Self-service override: the base employee role always reaches its own
/// attendance and payroll, whatever the bulk view capability says.
pub fn is_self_service(role: UserRole, page: PageKey) -> bool {
    role == UserRole::Employee && matches!(page, PageKey::Attendance | PageKey::Payroll)
}

/// Pages a role may enter, in navigation order
pub fn accessible_pages(role: UserRole) -> Vec<PageKey> {
    PageKey::ALL
        .into_iter()
        .filter(|page| can_access_page(role, *page))
        .collect()
}
