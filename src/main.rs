//! hr-console - inspect the HR console authorization policy
//!
//! Prints permission sets, page decisions, sidebars and control visibility
//! per role as JSON.

use clap::{Parser, Subcommand};
use hr_console::auth::rbac::{self, Capability, PageKey, RbacSystem};
use hr_console::auth::{RouteDecision, resolve_route_named};
use hr_console::config::Config;
use hr_console::console::{self, page_title};
use hr_console::core::models::UserRole;
use hr_console::utils::logging::init_logging;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "hr-console", version, about = "Inspect the HR console authorization policy")]
struct Cli {
    /// YAML configuration file; HR_CONSOLE_* environment variables override it
    #[arg(short, long, env = "HR_CONSOLE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Permission set of a role
    Permissions {
        #[arg(short, long)]
        role: String,
    },
    /// Whether a role holds a capability
    Can {
        #[arg(short, long)]
        role: String,
        /// camelCase capability name, e.g. canCreateEmployees
        #[arg(short = 'C', long)]
        capability: String,
    },
    /// Page access and route outcome for a role
    Page {
        #[arg(short, long)]
        role: String,
        #[arg(short, long)]
        page: String,
    },
    /// Sidebar a role sees
    Nav {
        #[arg(short, long)]
        role: String,
    },
    /// Action controls a role sees
    Controls {
        #[arg(short, long)]
        role: String,
    },
    /// Full role by capability and role by page matrix
    Matrix,
    /// Build information
    Info,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let config = Config::load(cli.config.as_deref()).await?;
    init_logging(config.logging())?;

    let system = RbacSystem::new(config.rbac());

    let output = match cli.command {
        Command::Permissions { role } => serde_json::to_value(system.permissions_for_raw(&role)?)?,
        Command::Can { role, capability } => {
            let capability: Capability = capability.parse()?;
            json!({
                "role": role,
                "capability": capability,
                "granted": system.has_capability_raw(&role, capability)?,
            })
        }
        Command::Page { role, page } => {
            let resolved = system.resolve_role(&role)?;
            let title = page
                .parse::<PageKey>()
                .ok()
                .map(|key| page_title(resolved, key));
            // An unknown role is still signed in, so it is denied rather than sent to login
            let (accessible, route) = match resolved {
                Some(known) => (
                    system.allows_page(known, &page),
                    resolve_route_named(Some(known), &page),
                ),
                None => (false, RouteDecision::Denied),
            };
            json!({
                "role": role,
                "page": page,
                "title": title,
                "accessible": accessible,
                "route": route,
            })
        }
        Command::Nav { role } => {
            let sections = system
                .resolve_role(&role)?
                .map(console::sidebar)
                .unwrap_or_default();
            serde_json::to_value(sections)?
        }
        Command::Controls { role } => {
            let controls = system
                .resolve_role(&role)?
                .map(console::visible_controls)
                .unwrap_or_default();
            serde_json::to_value(controls)?
        }
        Command::Matrix => matrix(),
        Command::Info => json!({
            "version": env!("CARGO_PKG_VERSION"),
            "git_hash": env!("GIT_HASH"),
            "build_time": env!("BUILD_TIME"),
            "rust_version": env!("RUST_VERSION"),
            "landing_page": config.rbac().landing_page,
        }),
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn matrix() -> Value {
    let roles: Vec<Value> = UserRole::ALL
        .into_iter()
        .map(|role| {
            json!({
                "role": role.as_str(),
                "display_name": role.display_name(),
                "capabilities": rbac::permissions_for(role).granted(),
                "pages": rbac::accessible_pages(role),
            })
        })
        .collect();

    Value::Array(roles)
}
