//! Query and selection dispatch
//!
//! The [`Extension`] value ties the pieces together behind the two entry
//! points a host runtime calls: [`Extension::on_query`] turns typed text
//! into an ordered result list, and [`Extension::on_select`] turns a chosen
//! result back into a launch action. It owns the single installed `Config`;
//! preference updates replace that value wholesale.

use crate::command::Password;
use crate::config::Config;
use crate::deps;
use crate::hosts::{self, HostEntry};
use crate::i18n::{self, Messages};
use crate::launch;
use crate::matcher::{match_hosts, parse_query};
use crate::prompt::CredentialPrompt;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Payload attached to a rendered result and handed back on selection.
///
/// Carried opaquely (as JSON) by the host runtime, so it is re-validated at
/// launch time rather than trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionPayload {
    /// Number of tabs to open
    #[serde(rename = "n")]
    pub tab_count: u32,
    /// Host to connect to
    pub host: String,
    /// Whether key-based auth is configured; `None` for hosts not present
    /// in the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_identity_file: Option<bool>,
}

/// One row of the rendered result list
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Primary text (the host name, or an informational label)
    pub name: String,
    /// Secondary descriptive text
    pub description: String,
    /// Selection payload; informational rows carry none
    pub payload: Option<SelectionPayload>,
}

/// What became of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// A terminal process was spawned with this many tabs
    Launched { tabs: u32 },
    /// Nothing was spawned: prompt dismissed, spawn failed, or bad payload
    Aborted,
}

/// Long-lived extension state: installed config, resolved messages, and the
/// dependency check computed once at startup.
pub struct Extension {
    config: Config,
    messages: &'static Messages,
    missing_deps: Vec<String>,
    ssh_config_path: PathBuf,
}

impl Extension {
    /// Create an extension with the default SSH config location and a fresh
    /// dependency check.
    pub fn new(config: Config) -> Self {
        let ssh_config_path =
            hosts::default_config_path().unwrap_or_else(|| PathBuf::from(".ssh/config"));
        Self::with_environment(config, ssh_config_path, deps::missing_dependencies())
    }

    /// Create an extension with explicit environment inputs. Tests use this
    /// to pin the SSH config path and the dependency check result.
    pub fn with_environment(
        config: Config,
        ssh_config_path: PathBuf,
        missing_deps: Vec<String>,
    ) -> Self {
        let messages = i18n::bundle(&config.resolved_language());
        Self {
            config,
            messages,
            missing_deps,
            ssh_config_path,
        }
    }

    /// The currently installed configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Binaries the dependency check could not resolve
    pub fn missing_dependencies(&self) -> &[String] {
        &self.missing_deps
    }

    /// Install a new configuration wholesale, re-resolving the language
    pub fn update_config(&mut self, config: Config) {
        self.messages = i18n::bundle(&config.resolved_language());
        self.config = config;
    }

    /// Handle a typed query: parse the tab count, re-read the SSH config,
    /// and rank matching hosts. With unresolved dependencies, a single
    /// informational row is returned instead.
    pub fn on_query(&self, text: &str) -> Vec<QueryResult> {
        if !self.missing_deps.is_empty() {
            return vec![QueryResult {
                name: self.messages.missing_deps_label.to_string(),
                description: self.messages.describe_missing(&self.missing_deps),
                payload: None,
            }];
        }

        let query = parse_query(text, self.config.max_tabs);
        let all_hosts: Vec<HostEntry> = hosts::parse_ssh_config(&self.ssh_config_path);
        debug!(
            "Query {:?} against {} host(s), {} tab(s)",
            query.filter,
            all_hosts.len(),
            query.tab_count
        );

        match_hosts(&query.filter, &all_hosts)
            .into_iter()
            .map(|candidate| QueryResult {
                description: self
                    .messages
                    .describe_connection(&candidate.name, query.tab_count),
                payload: Some(SelectionPayload {
                    tab_count: query.tab_count,
                    host: candidate.name.clone(),
                    has_identity_file: candidate.has_identity_file,
                }),
                name: candidate.name,
            })
            .collect()
    }

    /// Handle a selection: prompt for a password unless key-based auth is
    /// configured, then spawn the terminal. Every failure aborts this one
    /// action and leaves no partial state behind.
    pub fn on_select(&self, payload: &SelectionPayload) -> LaunchOutcome {
        if payload.host.is_empty() {
            return LaunchOutcome::Aborted;
        }

        // Clamp again at launch time; the payload round-tripped through the
        // host runtime and is not trusted.
        let tab_count = payload.tab_count.clamp(1, self.config.max_tabs.max(1));

        let password: Option<Password> = if payload.has_identity_file == Some(true) {
            None
        } else {
            match CredentialPrompt::default().prompt() {
                Ok(password) => Some(password),
                Err(e) => {
                    debug!("Launch aborted before spawn: {}", e);
                    return LaunchOutcome::Aborted;
                }
            }
        };

        match launch::launch(&self.config, &payload.host, tab_count, password.as_ref()) {
            Ok(()) => LaunchOutcome::Launched { tabs: tab_count },
            Err(e) => {
                warn!("Launch failed: {}", e);
                LaunchOutcome::Aborted
            }
        }
        // `password` drops here and zeroizes.
    }
}
