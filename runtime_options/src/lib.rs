//! Runtime options resolution for a k6-compatible load testing runner.
//!
//! The options controlling how a test script is compiled and executed come
//! from three competing sources: command-line flags, a fixed set of
//! environment variables (`K6_TYPE`, `K6_COMPATIBILITY_MODE`,
//! `K6_INCLUDE_SYSTEM_ENV_VARS`, `K6_NO_THRESHOLDS`, `K6_NO_SUMMARY`,
//! `K6_SUMMARY_EXPORT`, `SSLKEYLOGFILE`), and schema defaults. This crate
//! declares the flags for an external [`clap::Command`] and merges the parsed
//! results with an environment snapshot into a single [`RuntimeOptions`]
//! aggregate.
//!
//! The snapshot is an injected mapping rather than ambient process state, so
//! resolution is a pure, synchronous computation that can be unit tested
//! deterministically. The caller that owns the process environment decides
//! what goes into the snapshot.
//!
//! # Examples
//!
//! ```
//! use runtime_options::{EnvVars, flag_args, resolve};
//!
//! # fn main() -> Result<(), runtime_options::OptionsError> {
//! let command = clap::Command::new("runner").args(flag_args(false));
//! let matches = command.get_matches_from(["runner", "--type", "js", "-e", "FOO=bar"]);
//!
//! let mut environment = EnvVars::new();
//! environment.insert("K6_NO_SUMMARY".to_owned(), "1".to_owned());
//!
//! let options = resolve(&matches, &environment)?;
//! assert_eq!(options.test_type.value(), "js");
//! assert!(*options.no_summary.value());
//! assert_eq!(options.env.get("FOO").map(String::as_str), Some("bar"));
//! # Ok(())
//! # }
//! ```

mod compat;
mod env;
mod error;
mod flags;
mod options;
mod resolve;
mod value;

pub use compat::CompatibilityMode;
pub use error::OptionsError;
pub use flags::flag_args;
pub use options::{EnvVars, RuntimeOptions};
pub use resolve::resolve;
pub use value::OptionValue;
