//! JavaScript compiler compatibility modes recognised by the runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::OptionsError;

/// Compiler compatibility mode for test scripts.
///
/// `Extended` layers an ES2015 transpilation preset on top of the core VM;
/// `Base` uses the core VM alone (ES5.1+). The textual forms are part of the
/// external contract: they appear on the command line and in
/// `K6_COMPATIBILITY_MODE`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CompatibilityMode {
    /// Core VM plus the ES2015 transpilation preset.
    #[default]
    Extended,
    /// Core VM alone, supporting ES5.1+.
    Base,
}

impl CompatibilityMode {
    /// Canonical textual form of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extended => "extended",
            Self::Base => "base",
        }
    }
}

impl FromStr for CompatibilityMode {
    type Err = OptionsError;

    /// Parses a merged compatibility-mode string.
    ///
    /// An empty string selects the default mode, so callers that never
    /// declared the option still compile scripts in extended mode.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" => Ok(Self::default()),
            "extended" => Ok(Self::Extended),
            "base" => Ok(Self::Base),
            other => Err(OptionsError::CompatibilityMode {
                mode: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for CompatibilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
