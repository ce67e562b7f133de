//! CLI integration tests
//!
//! Run the `hr-console` binary and check that stdout is a single JSON
//! document and that the unknown-role policy matches the library.

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use std::io::Write;
    use std::process::{Command, Output};

    const ENV_VARS: [&str; 6] = [
        "HR_CONSOLE_CONFIG",
        "HR_CONSOLE_STRICT_ROLES",
        "HR_CONSOLE_LOG_DECISIONS",
        "HR_CONSOLE_LANDING_PAGE",
        "HR_CONSOLE_LOG_LEVEL",
        "HR_CONSOLE_LOG_JSON",
    ];

    /// Run the binary from an empty directory with a clean environment
    fn hr_console(args: &[&str], envs: &[(&str, &str)]) -> Output {
        let workdir = tempfile::tempdir().unwrap();
        let mut command = Command::new(env!("CARGO_BIN_EXE_hr-console"));
        command.current_dir(workdir.path()).env_remove("RUST_LOG");
        for name in ENV_VARS {
            command.env_remove(name);
        }
        command.envs(envs.iter().copied()).args(args);
        command.output().unwrap()
    }

    fn json_stdout(output: &Output) -> Value {
        assert!(
            output.status.success(),
            "hr-console failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({}): {}",
                e,
                String::from_utf8_lossy(&output.stdout)
            )
        })
    }

    fn strict_config() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rbac:\n  strict_roles: true").unwrap();
        file
    }

    #[test]
    fn test_every_subcommand_prints_json() {
        let cases: [&[&str]; 7] = [
            &["permissions", "--role", "hr"],
            &["can", "--role", "admin", "--capability", "canManageUsers"],
            &["page", "--role", "user", "--page", "payroll"],
            &["nav", "--role", "hr-manager"],
            &["controls", "--role", "administrator"],
            &["matrix"],
            &["info"],
        ];

        for args in cases {
            // Debug logging must not leak into stdout
            let output = hr_console(args, &[("HR_CONSOLE_LOG_LEVEL", "debug")]);
            json_stdout(&output);
        }
    }

    #[test]
    fn test_known_role_answers() {
        let permissions = json_stdout(&hr_console(&["permissions", "--role", "hr"], &[]));
        assert_eq!(permissions["canCreateEmployees"], Value::Bool(true));
        assert_eq!(permissions["canManageUsers"], Value::Bool(false));

        let page = json_stdout(&hr_console(
            &["page", "--role", "user", "--page", "settings"],
            &[],
        ));
        assert_eq!(page["accessible"], Value::Bool(true));
        assert_eq!(page["route"]["outcome"], "denied");

        let page = json_stdout(&hr_console(
            &["page", "--role", "admin", "--page", "users"],
            &[],
        ));
        assert_eq!(page["route"]["outcome"], "render");
    }

    #[test]
    fn test_unknown_role_fails_closed() {
        let permissions = json_stdout(&hr_console(&["permissions", "--role", "contractor"], &[]));
        assert!(
            permissions
                .as_object()
                .unwrap()
                .values()
                .all(|granted| granted == &Value::Bool(false))
        );

        let nav = json_stdout(&hr_console(&["nav", "--role", "contractor"], &[]));
        assert_eq!(nav, Value::Array(Vec::new()));

        let controls = json_stdout(&hr_console(&["controls", "--role", "contractor"], &[]));
        assert_eq!(controls, Value::Array(Vec::new()));

        let can = json_stdout(&hr_console(
            &["can", "--role", "contractor", "--capability", "canViewReports"],
            &[],
        ));
        assert_eq!(can["granted"], Value::Bool(false));

        let page = json_stdout(&hr_console(
            &["page", "--role", "contractor", "--page", "dashboard"],
            &[],
        ));
        assert_eq!(page["accessible"], Value::Bool(false));
        assert_eq!(page["route"]["outcome"], "denied");
    }

    #[test]
    fn test_unknown_role_is_logged_once() {
        let output = hr_console(&["page", "--role", "contractor", "--page", "dashboard"], &[]);
        json_stdout(&output);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(stderr.matches("Unknown role encountered").count(), 1);
    }

    #[test]
    fn test_unknown_role_errors_in_strict_mode() {
        let config = strict_config();
        let path = config.path().to_str().unwrap();

        for subcommand in ["permissions", "nav", "controls"] {
            let output = hr_console(&["--config", path, subcommand, "--role", "contractor"], &[]);
            assert!(!output.status.success());
            assert!(output.stdout.is_empty());
            assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown role: contractor"));
        }
    }

    #[test]
    fn test_environment_overrides_config_file() {
        let config = strict_config();
        let path = config.path().to_str().unwrap();

        let output = hr_console(
            &["--config", path, "nav", "--role", "contractor"],
            &[("HR_CONSOLE_STRICT_ROLES", "false")],
        );
        assert_eq!(json_stdout(&output), Value::Array(Vec::new()));
    }
}
