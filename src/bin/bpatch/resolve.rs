//! Expansion of `~` and environment references in the target path.

use std::path::{Path, PathBuf};

/// Expand a leading `~` and any `$VAR` / `${VAR}` references in a raw `-f`
/// value. The result is not checked for existence.
pub fn resolve_path(raw: &str) -> PathBuf {
    let expanded = expand_tilde_with(raw, dirs::home_dir().as_deref());
    PathBuf::from(expand_env_with(&expanded, |name| std::env::var(name).ok()))
}

fn expand_tilde_with(raw: &str, home: Option<&Path>) -> String {
    if raw == "~"
        && let Some(home) = home
    {
        return home.to_string_lossy().into_owned();
    }
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = home
    {
        return format!("{}/{rest}", home.to_string_lossy());
    }
    raw.to_string()
}

/// References to unset variables expand to the empty string, matching shell
/// word expansion. `$` followed by neither a name nor a brace stays literal.
fn expand_env_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, remainder) = if let Some(inner) = after.strip_prefix('{') {
            match inner.find('}') {
                Some(end) => (&inner[..end], &inner[end + 1..]),
                None => {
                    // Unterminated brace: keep the text as written.
                    out.push('$');
                    out.push_str(after);
                    return out;
                }
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], &after[end..])
        };

        if name.is_empty() {
            out.push('$');
            rest = after;
            continue;
        }

        if let Some(value) = lookup(name) {
            out.push_str(&value);
        }
        rest = remainder;
    }

    out.push_str(rest);
    out
}
