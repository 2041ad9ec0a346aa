//! Lexical rules for environment variable names and values.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::OptionsError;

// ASCII letters, digits, and underscores, not starting with a digit.
#[expect(clippy::unwrap_used, reason = "the pattern is a valid constant")]
static VAR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap());

/// Whether `name` is acceptable as a variable name in the script runtime.
pub(crate) fn is_legal_name(name: &str) -> bool {
    VAR_NAME.is_match(name)
}

/// Splits an explicit `VAR=value` entry at the first `=`.
///
/// The value may itself contain `=` or be empty. A missing separator or an
/// illegal name is an error; explicit entries fail loudly rather than being
/// skipped.
pub(crate) fn split_assignment(entry: &str) -> Result<(&str, &str), OptionsError> {
    let Some((name, value)) = entry.split_once('=') else {
        return Err(OptionsError::EnvVarAssignment {
            entry: entry.to_owned(),
        });
    };
    if !is_legal_name(name) {
        return Err(OptionsError::EnvVarName {
            name: name.to_owned(),
        });
    }
    Ok((name, value))
}

/// Parses a canonical boolean literal from an environment value.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and the matching false
/// spellings; anything else is `None`.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{is_legal_name, parse_bool, split_assignment};
    use crate::error::OptionsError;

    #[rstest]
    #[case("FOO", true)]
    #[case("_foo", true)]
    #[case("f00_", true)]
    #[case("K6_TYPE", true)]
    #[case("123BAD", false)]
    #[case("A-B", false)]
    #[case("á", false)]
    #[case("", false)]
    fn classifies_variable_names(#[case] name: &str, #[case] legal: bool) {
        assert_eq!(is_legal_name(name), legal);
    }

    #[rstest]
    #[case("FOO=bar", "FOO", "bar")]
    #[case("FOO=", "FOO", "")]
    #[case("FOO=a=b", "FOO", "a=b")]
    fn splits_assignments_at_the_first_equals(
        #[case] entry: &str,
        #[case] name: &str,
        #[case] value: &str,
    ) {
        assert_eq!(split_assignment(entry), Ok((name, value)));
    }

    #[test]
    fn missing_separator_is_an_error() {
        assert_eq!(
            split_assignment("FOO"),
            Err(OptionsError::EnvVarAssignment {
                entry: "FOO".to_owned(),
            })
        );
    }

    #[rstest]
    #[case("=x", "")]
    #[case("123BAD=x", "123BAD")]
    fn illegal_names_are_an_error(#[case] entry: &str, #[case] name: &str) {
        assert_eq!(
            split_assignment(entry),
            Err(OptionsError::EnvVarName {
                name: name.to_owned(),
            })
        );
    }

    #[rstest]
    #[case("1", Some(true))]
    #[case("t", Some(true))]
    #[case("T", Some(true))]
    #[case("TRUE", Some(true))]
    #[case("true", Some(true))]
    #[case("True", Some(true))]
    #[case("0", Some(false))]
    #[case("f", Some(false))]
    #[case("F", Some(false))]
    #[case("FALSE", Some(false))]
    #[case("false", Some(false))]
    #[case("False", Some(false))]
    #[case("maybe", None)]
    #[case("tRuE", None)]
    #[case("", None)]
    fn parses_boolean_literals(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(raw), expected);
    }
}
