//! Startup dependency resolution
//!
//! The launch pipeline shells out to two helpers: the password dialog and
//! the password-over-environment SSH helper. Their absence is detected once
//! at startup and gates all querying with an informational result instead
//! of failing at selection time.

/// External binaries the launch pipeline requires on the search path
pub const REQUIRED_BINARIES: &[&str] = &["zenity", "sshpass"];

/// Names of required binaries that cannot be resolved on the search path
pub fn missing_dependencies() -> Vec<String> {
    REQUIRED_BINARIES
        .iter()
        .filter(|binary| which::which(binary).is_err())
        .map(|binary| binary.to_string())
        .collect()
}
