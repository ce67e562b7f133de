//! Configuration integration tests
//!
//! Load configuration files from disk and feed them into the RBAC system.

#[cfg(test)]
mod tests {
    use hr_console::auth::rbac::{PageKey, RbacSystem};
    use hr_console::config::Config;
    use hr_console::utils::error::ConsoleError;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_strict_config_rejects_unknown_roles() {
        let file = write_config("rbac:\n  strict_roles: true\n");
        let config = Config::from_file(file.path()).await.unwrap();

        let system = RbacSystem::new(config.rbac());
        let err = system.permissions_for_raw("intern").unwrap_err();
        assert!(matches!(err, ConsoleError::UnknownRole(_)));
    }

    #[tokio::test]
    async fn test_default_config_fails_closed() {
        let file = write_config("logging:\n  level: debug\n");
        let config = Config::from_file(file.path()).await.unwrap();

        let system = RbacSystem::new(config.rbac());
        assert!(system.permissions_for_raw("intern").unwrap().is_empty());
        assert_eq!(config.rbac().landing_page, PageKey::Dashboard);
    }

    #[tokio::test]
    async fn test_restricted_landing_page_rejected() {
        let file = write_config("rbac:\n  landing_page: payroll\n");

        // Payroll is reachable by every role (employees via self-service)
        assert!(Config::from_file(file.path()).await.is_ok());

        let file = write_config("rbac:\n  landing_page: reports\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[tokio::test]
    async fn test_malformed_yaml() {
        let file = write_config("rbac: [not, a, map]\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
