//! Machine-name rules.
//!
//! A machine name is the normalized identifier a sub-theme is known by: it
//! doubles as the file-name token inside the generated tree and as the
//! system identifier the host CMS sees. The accepted shape is
//! `^[a-z][a-z0-9_]*$`.

/// Check a machine name against `^[a-z][a-z0-9_]*$`.
pub fn is_valid_machine_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Derive a machine name from a human-readable label.
///
/// ASCII alphanumerics and underscores are kept (lowercased); every run of
/// anything else collapses to a single `_`. No trimming is applied, so a
/// label with leading punctuation derives a name starting with `_` — that
/// name then fails [`is_valid_machine_name`] and is reported, rather than
/// silently fixed up.
pub fn label_to_machine_name(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_run = false;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c.to_ascii_lowercase());
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}
