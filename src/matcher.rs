//! Host matching and query parsing
//!
//! A query is `[<tab count>] [<filter text>]`, both optional. The filter is
//! a case-insensitive substring match against host names, ranked in two
//! tiers: names that start with the filter come first, then names that
//! merely contain it, alphabetical within each tier.

use crate::hosts::HostEntry;

/// A parsed user query: requested tab count plus the host filter text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Requested number of tabs, already clamped to `[1, max_tabs]`
    pub tab_count: u32,
    /// Free-text host filter; may be empty
    pub filter: String,
}

/// A host the user can select, either from the config file or synthesized
/// from the filter text when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Host name to connect to
    pub name: String,
    /// `Some` for hosts read from the config file, `None` for synthesized
    /// candidates whose auth method is unknown
    pub has_identity_file: Option<bool>,
}

/// Split a query into tab count and filter text.
///
/// If the first whitespace-separated token is a non-negative integer it is
/// taken as the tab count and the remainder is the filter; otherwise the
/// whole query is the filter. The count is clamped to `[1, max_tabs]`.
pub fn parse_query(text: &str, max_tabs: u32) -> ParsedQuery {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedQuery {
            tab_count: 1,
            filter: String::new(),
        };
    }

    let (first, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (trimmed, ""),
    };

    match first.parse::<u64>() {
        Ok(n) => ParsedQuery {
            tab_count: clamp_tab_count(n, max_tabs),
            filter: rest.to_string(),
        },
        Err(_) => ParsedQuery {
            tab_count: 1,
            filter: trimmed.to_string(),
        },
    }
}

/// Clamp a requested tab count into `[1, max_tabs]`
pub fn clamp_tab_count(requested: u64, max_tabs: u32) -> u32 {
    let max = u64::from(max_tabs.max(1));
    requested.clamp(1, max) as u32
}

/// Filter and rank hosts against the query filter text.
///
/// An empty filter matches every host in the given (already sorted) order.
/// When nothing matches a non-empty filter, a single candidate is
/// synthesized from the filter text so the user can still connect to hosts
/// absent from the config file.
pub fn match_hosts(filter: &str, hosts: &[HostEntry]) -> Vec<Candidate> {
    if filter.is_empty() {
        return hosts
            .iter()
            .map(|h| Candidate {
                name: h.name.clone(),
                has_identity_file: Some(h.has_identity_file),
            })
            .collect();
    }

    let needle = filter.to_lowercase();
    let mut ranked: Vec<(bool, Candidate)> = hosts
        .iter()
        .filter_map(|h| {
            let folded = h.name.to_lowercase();
            if folded.contains(&needle) {
                Some((
                    folded.starts_with(&needle),
                    Candidate {
                        name: h.name.clone(),
                        has_identity_file: Some(h.has_identity_file),
                    },
                ))
            } else {
                None
            }
        })
        .collect();

    // Prefix matches first, then alphabetical by original name. The sort is
    // stable, so equal keys keep their parse order.
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.name.cmp(&b.1.name)));

    if ranked.is_empty() {
        return vec![Candidate {
            name: filter.to_string(),
            has_identity_file: None,
        }];
    }

    ranked.into_iter().map(|(_, c)| c).collect()
}
