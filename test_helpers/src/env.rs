//! Builders for deterministic environment snapshots.
//!
//! Resolution code takes the environment as an injected mapping, so tests
//! never need to mutate real process state; they build a snapshot and pass
//! it in.

use std::collections::BTreeMap;

/// Builds an environment snapshot from name/value pairs.
///
/// # Examples
///
/// ```
/// use test_helpers::env;
///
/// let snapshot = env::snapshot(&[("FOO", "bar")]);
/// assert_eq!(snapshot.get("FOO").map(String::as_str), Some("bar"));
/// ```
#[must_use]
pub fn snapshot(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|&(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::snapshot;

    #[test]
    fn later_pairs_win_for_a_repeated_name() {
        let vars = snapshot(&[("FOO", "first"), ("FOO", "second")]);
        assert_eq!(vars.get("FOO").map(String::as_str), Some("second"));
        assert_eq!(vars.len(), 1);
    }
}
