//! Environment variable lookups with type coercion and defaults
//!
//! Lookups go through a caller-supplied function so parsing can be
//! exercised without touching the process environment.

/// Trimmed value of `key`, or `None` when it is unset
pub fn string_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|value| value.trim().to_string())
}

/// Boolean value of `key`; unset, empty or unparseable values yield `default`
pub fn bool_var<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    string_var(lookup, key)
        .and_then(|value| parse_bool(&value))
        .unwrap_or(default)
}

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
