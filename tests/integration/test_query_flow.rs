//! Integration tests: query flow
//!
//! Exercises the whole query path end to end: SSH config on disk, query
//! parsing, ranking, and the rendered result list with its payloads.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use tabssh::{Config, Extension};

fn write_ssh_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config");
    fs::write(&path, content).expect("Failed to write ssh config");
    (dir, path)
}

fn extension_with(content: &str) -> (TempDir, Extension) {
    let (dir, path) = write_ssh_config(content);
    // Pin the language so description assertions do not depend on the
    // environment's locale variables.
    let mut config = Config::default();
    config.language = "en".to_string();
    let extension = Extension::with_environment(config, path, vec![]);
    (dir, extension)
}

#[test]
fn test_empty_query_lists_all_hosts_sorted() {
    let (_dir, extension) = extension_with(
        "Host web2\nHost web1\nHost apiweb\n    IdentityFile ~/.ssh/id_api\n",
    );

    let results = extension.on_query("");
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["apiweb", "web1", "web2"]);

    for result in &results {
        let payload = result.payload.as_ref().expect("host rows carry payloads");
        assert_eq!(payload.tab_count, 1);
        assert!(result.description.contains("(1 tab)"));
    }
}

#[test]
fn test_prefix_ranking_order() {
    let (_dir, extension) = extension_with("Host web1\nHost web2\nHost apiweb\n");

    let results = extension.on_query("web");
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["web1", "web2", "apiweb"]);
}

#[test]
fn test_tab_count_parsed_and_clamped() {
    let (_dir, extension) = extension_with("Host web1\n");

    let results = extension.on_query("3 web");
    assert_eq!(results[0].payload.as_ref().unwrap().tab_count, 3);
    assert!(results[0].description.contains("(3 tab)"));

    let results = extension.on_query("99 web");
    assert_eq!(results[0].payload.as_ref().unwrap().tab_count, 10);
}

#[test]
fn test_no_match_synthesizes_verbatim_candidate() {
    let (_dir, extension) = extension_with("Host web1\n");

    let results = extension.on_query("2 db.internal");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "db.internal");

    let payload = results[0].payload.as_ref().unwrap();
    assert_eq!(payload.host, "db.internal");
    assert_eq!(payload.tab_count, 2);
    assert_eq!(payload.has_identity_file, None);
}

#[test]
fn test_wildcard_hosts_never_rendered() {
    let (_dir, extension) = extension_with(
        "Host *\n    IdentityFile ~/.ssh/id_default\n\nHost bastion\n",
    );

    let results = extension.on_query("");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "bastion");
    // The IdentityFile under the wildcard block attaches to nothing.
    assert_eq!(
        results[0].payload.as_ref().unwrap().has_identity_file,
        Some(false)
    );
}

#[test]
fn test_identity_flag_reaches_payload() {
    let (_dir, extension) =
        extension_with("Host keyed\n    IdentityFile ~/.ssh/id_rsa\nHost plain\n");

    let results = extension.on_query("");
    let keyed = results.iter().find(|r| r.name == "keyed").unwrap();
    let plain = results.iter().find(|r| r.name == "plain").unwrap();
    assert_eq!(
        keyed.payload.as_ref().unwrap().has_identity_file,
        Some(true)
    );
    assert_eq!(
        plain.payload.as_ref().unwrap().has_identity_file,
        Some(false)
    );
}

#[test]
fn test_missing_ssh_config_yields_synthesized_only() {
    let extension = Extension::with_environment(
        Config::default(),
        PathBuf::from("/nonexistent/ssh/config"),
        vec![],
    );

    // No config file: an empty query has nothing to show...
    assert!(extension.on_query("").is_empty());

    // ...but a typed host still produces a direct-connect candidate.
    let results = extension.on_query("adhoc.example.com");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "adhoc.example.com");
}

#[test]
fn test_missing_dependencies_gate_queries() {
    let (_dir, path) = write_ssh_config("Host web1\n");
    let extension = Extension::with_environment(
        Config::default(),
        path,
        vec!["zenity".to_string(), "sshpass".to_string()],
    );

    let results = extension.on_query("web");
    assert_eq!(results.len(), 1);
    assert!(results[0].payload.is_none());
    assert!(results[0].description.contains("zenity,sshpass"));
}

#[test]
fn test_config_edits_visible_on_next_query() {
    let (dir, path) = write_ssh_config("Host old\n");
    let extension = Extension::with_environment(Config::default(), path.clone(), vec![]);

    assert_eq!(extension.on_query("")[0].name, "old");

    // Re-parsed on every query: a config edit shows up immediately.
    fs::write(&path, "Host new\n").unwrap();
    assert_eq!(extension.on_query("")[0].name, "new");
    drop(dir);
}

#[test]
fn test_payload_roundtrips_through_json() {
    let (_dir, extension) = extension_with("Host web1\n    IdentityFile ~/.ssh/key\n");

    let results = extension.on_query("4 web");
    let payload = results[0].payload.as_ref().unwrap();

    // The host runtime carries payloads opaquely as JSON.
    let wire = serde_json::to_string(payload).unwrap();
    let restored: tabssh::SelectionPayload = serde_json::from_str(&wire).unwrap();
    assert_eq!(&restored, payload);
    assert!(wire.contains("\"n\":4"));
}
