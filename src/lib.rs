//! tabssh - multi-tab terminal SSH sessions from a fuzzy host query
//!
//! Type a host fragment, pick a match from `~/.ssh/config`, and get one or
//! more terminal tabs already connected (or password-prompted) to that host.
//!
//! ## Module Organization
//!
//! - [`config`] - Configuration value, file loading, language resolution
//! - [`hosts`] - SSH client config parsing into host entries
//! - [`matcher`] - Query grammar and two-tier host ranking
//! - [`command`] - SSH command templates and password escaping
//! - [`prompt`] - External password dialog invocation
//! - [`launch`] - Terminal argument vector and detached spawn
//! - [`dispatch`] - The `on_query` / `on_select` entry points
//! - [`deps`] - Startup check for required external binaries
//! - [`i18n`] - Message bundles per language
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use tabssh::init;
//!
//! # fn main() -> tabssh::Result<()> {
//! let extension = init();
//! for result in extension.on_query("3 web") {
//!     println!("{} — {}", result.name, result.description);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Safety and Reliability
//!
//! - Every failure is scoped to a single query or launch; nothing here is
//!   fatal to the hosting process
//! - Passwords are zeroized on drop and never logged
//! - The spawned terminal is fire-and-forget; no handles are retained

#[macro_use]
extern crate tracing;

pub mod command;
pub mod config;
pub mod deps;
pub mod dispatch;
pub mod error;
pub mod hosts;
pub mod i18n;
pub mod launch;
pub mod matcher;
pub mod prompt;

// Re-exports for core functionality
pub use config::loader::ConfigLoader;
pub use config::Config;
pub use dispatch::{Extension, LaunchOutcome, QueryResult, SelectionPayload};
pub use error::{Error, Result};
pub use hosts::HostEntry;
pub use matcher::{Candidate, ParsedQuery};

// Version information
/// The current version of tabssh from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize tabssh with configuration from the default search paths.
///
/// Loads the first readable config file (or defaults), resolves the display
/// language, and runs the external-binary dependency check once. Missing
/// dependencies are not an error here; they surface as an informational
/// query result until resolved.
pub fn init() -> Extension {
    info!("Initializing {} v{}", NAME, VERSION);

    let config = ConfigLoader::new().load();
    let extension = Extension::new(config);

    if !extension.missing_dependencies().is_empty() {
        warn!(
            "Missing dependencies: {}",
            extension.missing_dependencies().join(", ")
        );
    }

    extension
}

/// Initialize tabssh from an explicit config file path
pub fn init_with_config(config_path: &std::path::Path) -> Result<Extension> {
    info!(
        "Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    let config = ConfigLoader::load_from_path(config_path)?;
    Ok(Extension::new(config))
}
