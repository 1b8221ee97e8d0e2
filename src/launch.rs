//! Terminal session launching
//!
//! Builds the argument vector for one terminal emulator process that opens
//! `tab_count` tabs, each running the same already-built SSH command, and
//! spawns it detached. The spawned terminal is never waited on, polled, or
//! cleaned up; ownership passes entirely to the operating system.

use crate::command::{build_ssh_command, Password};
use crate::config::Config;
use crate::error::{Error, Result};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Flag preventing the terminal from delegating to an existing singleton
/// instance, which would swallow our tab arguments.
pub const DISABLE_SERVER_FLAG: &str = "--disable-server";

/// Environment variable read by the password-over-environment SSH helper
pub const PASSWORD_ENV_VAR: &str = "SSHPASS";

/// Build the terminal argument vector for a multi-tab launch.
///
/// The first tab needs no separator; every subsequent tab is preceded by the
/// configured tab flag so it opens in the same window. Titles carry the
/// 1-based tab index and the host name.
pub fn terminal_args(config: &Config, host: &str, ssh_command: &str, tab_count: u32) -> Vec<String> {
    let mut args = vec![DISABLE_SERVER_FLAG.to_string()];

    for i in 0..tab_count {
        if i > 0 {
            args.push(config.tab_option.clone());
        }
        args.push(format!("--title={}-{}", i + 1, host));
        args.push(config.command_option.clone());
        args.push(ssh_command.to_string());
    }

    args
}

/// Spawn one detached terminal process opening `tab_count` SSH tabs to `host`.
///
/// `tab_count` is clamped to the configured maximum again here; the render
/// path clamps too, but the payload travels through the host runtime opaquely
/// and is not trusted. When a password is used it is exported as
/// [`PASSWORD_ENV_VAR`] on the child so the auth helper can read it without
/// it appearing in process argument listings.
pub fn launch(
    config: &Config,
    host: &str,
    tab_count: u32,
    password: Option<&Password>,
) -> Result<()> {
    let tab_count = tab_count.clamp(1, config.max_tabs.max(1));

    let ssh_command = match password {
        Some(password) => build_ssh_command(&config.ssh_command_template, host, Some(password)),
        None => build_ssh_command(&config.ssh_command_template_no_pw, host, None),
    };

    let args = terminal_args(config, host, &ssh_command, tab_count);
    debug!(
        "Launching {} with {} argument(s)",
        config.terminal_command,
        args.len()
    );

    let mut command = Command::new(&config.terminal_command);
    command
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    if let Some(password) = password {
        command.env(PASSWORD_ENV_VAR, password.expose());
    }

    // Fire and forget: the Child handle is dropped without waiting.
    command.spawn().map_err(|e| Error::SpawnFailed {
        command: config.terminal_command.clone(),
        reason: e.to_string(),
    })?;

    info!("Opened {} tab(s) to {}", tab_count, host);
    Ok(())
}
