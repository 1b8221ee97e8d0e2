//! tabssh - open multi-tab terminal SSH sessions from a host query
//!
//! The binary drives the same two entry points a launcher host would call:
//! a query renders the ranked host list, and `--connect` selects the top
//! candidate and spawns the terminal.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use tracing::debug;

use tabssh::{Extension, LaunchOutcome};

/// Parsed command line arguments
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Launch the top-ranked candidate instead of listing
    connect: bool,
    /// Enable debug logging
    debug: bool,
    /// Query text, e.g. "3 web"
    query: String,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> anyhow::Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();
        let mut query_parts: Vec<String> = Vec::new();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => {
                    i += 1;
                    let path = args
                        .get(i)
                        .ok_or_else(|| anyhow::anyhow!("Missing config file path"))?;
                    app_args.config_path = Some(PathBuf::from(path));
                }
                "--connect" | "-c" => {
                    app_args.connect = true;
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("{} {}", tabssh::NAME, tabssh::VERSION);
                    process::exit(0);
                }
                other => {
                    query_parts.push(other.to_string());
                }
            }
            i += 1;
        }

        app_args.query = query_parts.join(" ");
        Ok(app_args)
    }
}

fn print_help() {
    println!("{} {}", tabssh::NAME, tabssh::VERSION);
    println!("Open multi-tab terminal SSH sessions from a host query");
    println!();
    println!("USAGE:");
    println!("    tabssh [OPTIONS] [QUERY...]");
    println!();
    println!("    The query is `[TABS] [FILTER]`: an optional leading tab count");
    println!("    followed by a host name fragment, e.g. `tabssh 3 web`.");
    println!();
    println!("OPTIONS:");
    println!("    -c, --connect        Launch the top-ranked candidate");
    println!("        --config <PATH>  Use a specific configuration file");
    println!("    -d, --debug          Enable debug logging");
    println!("    -h, --help           Print this help");
    println!("    -V, --version        Print version");
}

fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse()?;

    let env_filter = if args.debug {
        "debug".to_string()
    } else {
        env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .init();

    let extension: Extension = match &args.config_path {
        Some(path) => tabssh::init_with_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => tabssh::init(),
    };
    debug!("Query: {:?}", args.query);

    let results = extension.on_query(&args.query);
    if results.is_empty() {
        eprintln!("No SSH hosts found");
        process::exit(1);
    }

    if args.connect {
        let payload = results
            .iter()
            .find_map(|r| r.payload.as_ref())
            .ok_or_else(|| anyhow::anyhow!("{}", results[0].description))?;

        match extension.on_select(payload) {
            LaunchOutcome::Launched { tabs } => {
                debug!("Launched {} tab(s)", tabs);
            }
            LaunchOutcome::Aborted => {
                eprintln!("Launch aborted");
                process::exit(1);
            }
        }
    } else {
        for result in &results {
            println!("{:<24} {}", result.name, result.description);
        }
    }

    Ok(())
}
