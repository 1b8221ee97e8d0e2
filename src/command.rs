//! SSH command construction
//!
//! Fills the user-configurable SSH command templates and escapes passwords
//! for safe embedding. The built command string is handed to the terminal
//! emulator as a single argument and re-parsed by a shell inside the tab,
//! so every shell metacharacter in the password must be backslash-escaped
//! or it would be interpreted instead of passed through.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use zeroize::Zeroize;

/// Shell metacharacters that must be escaped inside the password
static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([\[\]$&`|;<>"'\\ ])"#).expect("special chars pattern is valid"));

/// A password captured from the credential prompt.
///
/// The backing memory is zeroized on drop, and the `Debug` impl never
/// reveals the contents, so a stray log line cannot leak it.
pub struct Password(String);

impl Password {
    pub fn new(secret: String) -> Self {
        Password(secret)
    }

    /// Borrow the secret for substitution or environment export
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(***)")
    }
}

/// Escape shell-special characters by prefixing them with a backslash
pub fn escape_special_chars(input: &str) -> String {
    SPECIAL_CHARS.replace_all(input, r"\$1").into_owned()
}

/// Build the final SSH command from a template.
///
/// Substitutes `{host}` always, and `{password}` (escaped) when a password
/// is given. The caller is expected to drop the password immediately after
/// the spawn that consumes this string.
pub fn build_ssh_command(template: &str, host: &str, password: Option<&Password>) -> String {
    let mut command = template.replace("{host}", host);
    if let Some(password) = password {
        command = command.replace("{password}", &escape_special_chars(password.expose()));
    }
    command
}
