//! Error types produced while resolving runtime options.

use thiserror::Error;

/// Errors that can occur while resolving runtime options.
///
/// Every variant is fatal to the resolution call that produced it; the
/// caller decides how to surface the failure.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum OptionsError {
    /// An environment variable expected to hold a boolean did not parse.
    #[error("environment variable '{name}' is not a valid boolean: '{value}'")]
    BoolParsing {
        /// Environment variable holding the value.
        name: String,
        /// Raw value that failed to parse.
        value: String,
    },

    /// The merged compatibility mode is not a recognised mode.
    #[error(r#"invalid compatibility mode "{mode}". Use: "extended", "base""#)]
    CompatibilityMode {
        /// The rejected mode string.
        mode: String,
    },

    /// An explicit `--env` entry used an illegal variable name.
    #[error("invalid environment variable name '{name}'")]
    EnvVarName {
        /// The rejected variable name.
        name: String,
    },

    /// An explicit `--env` entry was not of the form `VAR=value`.
    #[error("malformed environment variable assignment '{entry}', expected VAR=value")]
    EnvVarAssignment {
        /// The rejected command-line entry.
        entry: String,
    },
}

#[cfg(test)]
mod tests {
    use super::OptionsError;

    #[test]
    fn messages_name_the_offending_input() {
        let parse = OptionsError::BoolParsing {
            name: "K6_NO_SUMMARY".to_owned(),
            value: "maybe".to_owned(),
        };
        assert_eq!(
            parse.to_string(),
            "environment variable 'K6_NO_SUMMARY' is not a valid boolean: 'maybe'"
        );

        let mode = OptionsError::CompatibilityMode {
            mode: "legacy".to_owned(),
        };
        assert_eq!(
            mode.to_string(),
            r#"invalid compatibility mode "legacy". Use: "extended", "base""#
        );

        let name = OptionsError::EnvVarName {
            name: "123BAD".to_owned(),
        };
        assert_eq!(
            name.to_string(),
            "invalid environment variable name '123BAD'"
        );
    }
}
