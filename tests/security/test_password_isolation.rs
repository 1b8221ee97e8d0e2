//! Security tests: password isolation
//!
//! Verifies that passwords are escaped before entering a shell-reparsed
//! string, never appear where the configuration keeps them out, and never
//! leak through debug formatting.

use tabssh::command::{build_ssh_command, escape_special_chars, Password};
use tabssh::launch::terminal_args;
use tabssh::Config;

/// Shell-style tokenizer over the escaped character set: a backslash
/// followed by a special character yields that character literally.
fn unescape(escaped: &str) -> String {
    const SPECIALS: &[char] = &[
        '[', ']', '$', '&', '`', '|', ';', '<', '>', '"', '\'', '\\', ' ',
    ];
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next) = chars.peek() {
                if SPECIALS.contains(&next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

#[test]
fn test_escape_roundtrip() {
    let original = "a b$c";
    let escaped = escape_special_chars(original);
    assert_eq!(escaped, r"a\ b\$c");
    assert_eq!(unescape(&escaped), original);
}

#[test]
fn test_escape_roundtrip_hostile_passwords() {
    let hostile = [
        r#"pa$$;rm -rf ~"#,
        r#"`whoami`"#,
        r#"a|b&c<d>e"#,
        r#"quote"inside'both"#,
        r#"back\slash and space"#,
        "[bracketed]",
    ];
    for password in hostile {
        let escaped = escape_special_chars(password);
        assert_eq!(unescape(&escaped), password, "roundtrip for {:?}", password);
    }
}

#[test]
fn test_no_unescaped_specials_survive() {
    let escaped = escape_special_chars(r#"x;y|z"w"#);
    let mut prev_backslash = false;
    for ch in escaped.chars() {
        if [';', '|', '"'].contains(&ch) {
            assert!(prev_backslash, "unescaped {:?} in {:?}", ch, escaped);
        }
        prev_backslash = ch == '\\' && !prev_backslash;
    }
}

#[test]
fn test_password_absent_from_keyed_launch_args() {
    let config = Config::default();
    let ssh_command = build_ssh_command(&config.ssh_command_template_no_pw, "web1", None);
    let args = terminal_args(&config, "web1", &ssh_command, 4);

    for arg in &args {
        assert!(!arg.contains("SSHPASS"));
        assert!(!arg.contains("{password}"));
    }
}

#[test]
fn test_no_placeholder_left_in_password_command() {
    let config = Config::default();
    let password = Password::new("hunter2".to_string());
    let command = build_ssh_command(&config.ssh_command_template, "web1", Some(&password));
    assert!(!command.contains("{password}"));
    assert!(!command.contains("{host}"));
}

#[test]
fn test_password_debug_never_prints_secret() {
    let password = Password::new("correct horse battery staple".to_string());
    let debug = format!("{:?}", password);
    assert!(!debug.contains("horse"));
}
