//! Configuration management for tabssh
//!
//! Holds the user-overridable settings that shape every launch: which
//! terminal emulator to run, the flags it takes for tabs and commands, the
//! tab ceiling, the two SSH command templates, and the display language.
//!
//! A `Config` is an immutable value. Preference updates build a fresh
//! `Config` and install it wholesale; nothing mutates fields in place.

pub mod loader;

use serde::{Deserialize, Deserializer, Serialize};
use std::env;

/// Fallback tab ceiling used whenever `max_tabs` is missing or invalid
pub const DEFAULT_MAX_TABS: u32 = 10;

/// Language used when neither the config nor the system locale yields one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Main configuration structure for tabssh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal emulator binary to spawn
    pub terminal_command: String,

    /// Flag that opens an additional tab in the same window
    pub tab_option: String,

    /// Flag that precedes the command a tab should run
    pub command_option: String,

    /// Upper bound on tabs opened by a single launch
    #[serde(deserialize_with = "deserialize_max_tabs")]
    pub max_tabs: u32,

    /// SSH command template used when a password must be supplied.
    /// Placeholders: `{password}`, `{host}`.
    pub ssh_command_template: String,

    /// SSH command template used when key-based auth is configured.
    /// Placeholder: `{host}`.
    pub ssh_command_template_no_pw: String,

    /// ISO language short code; empty means detect from the system locale
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            terminal_command: "xfce4-terminal".to_string(),
            tab_option: "--tab".to_string(),
            command_option: "--command".to_string(),
            max_tabs: DEFAULT_MAX_TABS,
            ssh_command_template:
                "bash -c 'export SSHPASS={password}; sshpass -e ssh {host}; exec bash'".to_string(),
            ssh_command_template_no_pw: "bash -c 'ssh {host}; exec bash'".to_string(),
            language: String::new(),
        }
    }
}

impl Config {
    /// Resolve the effective display language for this configuration.
    ///
    /// Explicit setting wins; otherwise the system locale's primary subtag;
    /// otherwise [`DEFAULT_LANGUAGE`].
    pub fn resolved_language(&self) -> String {
        resolve_language(&self.language)
    }
}

/// Accept `max_tabs` as an integer or a numeric string, falling back to
/// [`DEFAULT_MAX_TABS`] for anything non-numeric or non-positive. A bad
/// preference value must never fail the whole config load.
fn deserialize_max_tabs<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaxTabs {
        Number(i64),
        Text(String),
    }

    let parsed = match MaxTabs::deserialize(deserializer) {
        Ok(MaxTabs::Number(n)) if n > 0 => u32::try_from(n).unwrap_or(DEFAULT_MAX_TABS),
        Ok(MaxTabs::Text(s)) => match s.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => DEFAULT_MAX_TABS,
        },
        _ => DEFAULT_MAX_TABS,
    };
    Ok(parsed)
}

/// Resolve a display language from an explicit setting or the environment.
pub fn resolve_language(explicit: &str) -> String {
    let explicit = explicit.trim();
    if !explicit.is_empty() {
        return explicit.to_lowercase();
    }

    system_language().unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Primary subtag of the system locale, read from the usual POSIX variables
/// in precedence order. `C` and `POSIX` locales carry no language.
fn system_language() -> Option<String> {
    for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = env::var(var) {
            let value = value.trim();
            if value.is_empty() || value == "C" || value == "POSIX" {
                continue;
            }
            let primary = value
                .split(['_', '.', '@'])
                .next()
                .unwrap_or(value)
                .to_lowercase();
            if !primary.is_empty() {
                return Some(primary);
            }
        }
    }
    None
}
