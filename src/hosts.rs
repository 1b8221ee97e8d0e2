//! SSH client configuration parsing
//!
//! Reads the subset of `~/.ssh/config` that matters for launching sessions:
//! `Host` blocks name the destinations, and the presence of an
//! `IdentityFile` line inside a block means key-based auth is configured and
//! no password prompt is needed.
//!
//! The file is re-parsed on every query. The config is tiny, so correctness
//! over freshness costs nothing and there is no cache to invalidate.

use std::fs;
use std::path::{Path, PathBuf};

/// One SSH destination extracted from the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// Host alias as declared in the config
    pub name: String,
    /// Whether the block carries an `IdentityFile` line
    pub has_identity_file: bool,
}

/// Default location of the user's SSH client configuration
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ssh").join("config"))
}

/// Parse the SSH config file at `path` into host entries, sorted ascending
/// by name. A missing file is not an error; it yields an empty list.
pub fn parse_ssh_config(path: &Path) -> Vec<HostEntry> {
    match fs::read_to_string(path) {
        Ok(content) => parse_entries(&content),
        Err(_) => Vec::new(),
    }
}

/// Line-by-line state machine over the config content.
///
/// A `Host` line with a wildcard pattern creates no entry and clears the
/// current block, so a later `IdentityFile` under it attaches to nothing.
fn parse_entries(content: &str) -> Vec<HostEntry> {
    let mut entries: Vec<HostEntry> = Vec::new();
    let mut in_named_block = false;

    for line in content.lines() {
        let trimmed = line.trim();
        let mut words = trimmed.split_whitespace();
        let Some(keyword) = words.next() else {
            continue;
        };

        if keyword.eq_ignore_ascii_case("host") {
            match words.next() {
                Some(pattern) if !is_wildcard(pattern) => {
                    entries.push(HostEntry {
                        name: pattern.to_string(),
                        has_identity_file: false,
                    });
                    in_named_block = true;
                }
                _ => {
                    in_named_block = false;
                }
            }
        } else if keyword.to_ascii_lowercase().starts_with("identityfile") {
            if in_named_block {
                if let Some(entry) = entries.last_mut() {
                    entry.has_identity_file = true;
                }
            }
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// SSH patterns use `*` and `?` as wildcards
fn is_wildcard(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}
