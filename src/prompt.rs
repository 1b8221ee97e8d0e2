//! Interactive credential prompt
//!
//! Obtains a password through an external dialog process, once per launch
//! action no matter how many tabs will be opened. Anything other than a
//! clean exit with a non-empty password is treated uniformly as an abort:
//! the user dismissing the dialog, the dialog failing to start, or empty
//! output all cancel the launch with nothing spawned.

use crate::command::Password;
use crate::error::{Error, Result};
use std::env;
use std::process::{Command, Stdio};
use tracing::debug;

/// External dialog invocation for capturing a password
pub struct CredentialPrompt {
    /// Dialog binary to run
    binary: String,
    /// Window title shown to the user
    title: String,
}

impl Default for CredentialPrompt {
    fn default() -> Self {
        Self {
            binary: "zenity".to_string(),
            title: "SSH Password".to_string(),
        }
    }
}

impl CredentialPrompt {
    /// Create a prompt backed by a specific binary (used by tests)
    pub fn with_binary(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
            ..Self::default()
        }
    }

    /// Run the dialog and capture the entered password.
    ///
    /// The child inherits the current environment; `XAUTHORITY` is defaulted
    /// from the home directory when unset so the dialog can reach the
    /// display even when launched outside a login shell.
    pub fn prompt(&self) -> Result<Password> {
        let mut command = Command::new(&self.binary);
        command
            .arg("--password")
            .arg(format!("--title={}", self.title))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());

        if env::var_os("XAUTHORITY").is_none() {
            if let Some(home) = dirs::home_dir() {
                command.env("XAUTHORITY", home.join(".Xauthority"));
            }
        }

        let output = command.output().map_err(|e| Error::PromptFailed {
            reason: e.to_string(),
        })?;

        if !output.status.success() {
            debug!("Password dialog exited with {}", output.status);
            return Err(Error::PromptCancelled);
        }

        let captured = String::from_utf8_lossy(&output.stdout);
        let password = captured.trim_end();
        if password.is_empty() {
            return Err(Error::PromptCancelled);
        }

        Ok(Password::new(password.to_string()))
    }
}
