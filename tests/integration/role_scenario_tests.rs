//! Role scenario integration tests
//!
//! One test per console walkthrough: what each role sees in the sidebar,
//! where navigation lands, and which action controls render.

#[cfg(test)]
mod tests {
    use crate::common::{SidebarAssertions, UserFactory};
    use hr_console::auth::rbac::{self, Capability, PageKey, RbacSystem};
    use hr_console::auth::{RouteDecision, Session};
    use hr_console::config::RbacConfig;
    use hr_console::console::{Control, ControlState, control_state_for, sidebar_for};
    use hr_console::core::models::UserRole;

    // ==================== Employee ====================

    #[test]
    fn test_employee_walkthrough() {
        let session = UserFactory::session(UserFactory::employee());
        let nav = sidebar_for(&session);

        assert_eq!(
            nav.pages(),
            vec![
                PageKey::Dashboard,
                PageKey::Profile,
                PageKey::Attendance,
                PageKey::Leaves,
                PageKey::Payroll,
            ]
        );
        for page in [
            PageKey::Employees,
            PageKey::Departments,
            PageKey::Users,
            PageKey::Reports,
            PageKey::Settings,
        ] {
            nav.assert_omits(page);
        }

        // Self-service pages render even though bulk view is not granted
        assert_eq!(
            session.resolve_route(PageKey::Attendance),
            RouteDecision::Render(PageKey::Attendance)
        );
        assert_eq!(
            session.resolve_route(PageKey::Payroll),
            RouteDecision::Render(PageKey::Payroll)
        );
        assert!(!session.has_capability(Capability::CanViewAttendance));
        assert!(!session.has_capability(Capability::CanViewPayroll));

        assert_eq!(session.resolve_route(PageKey::Employees), RouteDecision::Denied);
        assert_eq!(
            control_state_for(&session, Control::ApproveLeave),
            ControlState::Hidden
        );
        assert_eq!(
            session.current_user().unwrap().self_service_scope().map(str::to_owned),
            session.current_user().unwrap().employee_id
        );
    }

    // ==================== HR Manager ====================

    #[test]
    fn test_hr_manager_walkthrough() {
        let session = UserFactory::session(UserFactory::hr_manager());

        assert_eq!(session.resolve_route(PageKey::Users), RouteDecision::Denied);
        assert_eq!(
            session.resolve_route(PageKey::Employees),
            RouteDecision::Render(PageKey::Employees)
        );
        assert_eq!(
            control_state_for(&session, Control::AddEmployee),
            ControlState::Visible
        );
        assert_eq!(
            control_state_for(&session, Control::DeleteEmployee),
            ControlState::Hidden
        );

        let nav = sidebar_for(&session);
        nav.assert_lists(PageKey::Employees);
        nav.assert_lists(PageKey::Settings);
        nav.assert_omits(PageKey::Users);
    }

    // ==================== Administrator ====================

    #[test]
    fn test_administrator_walkthrough() {
        let session = UserFactory::session(UserFactory::administrator());

        for page in PageKey::ALL {
            assert_eq!(session.resolve_route(page), RouteDecision::Render(page));
        }
        assert_eq!(
            control_state_for(&session, Control::DeleteEmployee),
            ControlState::Visible
        );
        sidebar_for(&session).assert_lists(PageKey::Users);
    }

    // ==================== Session lifecycle ====================

    #[test]
    fn test_signed_out_console() {
        let session = Session::anonymous();

        assert!(sidebar_for(&session).is_empty());
        assert_eq!(session.resolve_route(PageKey::Dashboard), RouteDecision::Login);
        assert_eq!(
            control_state_for(&session, Control::AddEmployee),
            ControlState::Hidden
        );
    }

    #[test]
    fn test_promotion_is_seen_on_next_render() {
        let mut user = UserFactory::hr_manager();
        let session = UserFactory::session(user.clone());
        assert_eq!(session.resolve_route(PageKey::Users), RouteDecision::Denied);

        user.role = UserRole::Administrator;
        session.sign_in(user);
        assert_eq!(
            session.resolve_route(PageKey::Users),
            RouteDecision::Render(PageKey::Users)
        );
        sidebar_for(&session).assert_lists(PageKey::Users);
    }

    // ==================== Raw API payloads ====================

    #[test]
    fn test_role_strings_from_api() {
        let system = RbacSystem::new(&RbacConfig::default());

        assert!(system.can_access_page_raw("admin", "users").unwrap());
        assert!(!system.can_access_page_raw("hr", "users").unwrap());
        assert!(system.can_access_page_raw("user", "payroll").unwrap());
        assert!(!system.can_access_page_raw("user", "nonexistent-page").unwrap());

        // Fails closed on a role the client does not know
        assert!(!system.can_access_page_raw("contractor", "dashboard").unwrap());
        assert!(system.permissions_for_raw("contractor").unwrap().is_empty());
    }

    #[test]
    fn test_lookup_consistency_for_every_role() {
        for role in UserRole::ALL {
            let set = rbac::permissions_for(role);
            for capability in Capability::ALL {
                assert_eq!(rbac::has_capability(role, capability), set.get(capability));
            }
        }
    }
}
