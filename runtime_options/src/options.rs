//! The resolved runtime options aggregate.

use std::collections::BTreeMap;

use crate::value::OptionValue;

/// Mapping of environment variable names to values.
///
/// Used both for the read-only snapshot handed to [`crate::resolve()`] and
/// for the variables injected into the executed script's runtime.
pub type EnvVars = BTreeMap<String, String>;

/// Options controlling how a test script is compiled and executed.
///
/// Constructed by [`crate::resolve()`]. Each scalar records whether the command
/// line or the environment explicitly set it; the `env` mapping is owned
/// exclusively by this aggregate and never aliases the input snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RuntimeOptions {
    /// Override for the detected test type (`js` or `archive`).
    pub test_type: OptionValue<String>,
    /// JavaScript compiler compatibility mode.
    pub compatibility_mode: OptionValue<String>,
    /// Whether to copy the system environment into the script runtime.
    pub include_system_env_vars: OptionValue<bool>,
    /// Skip threshold evaluation for the run.
    pub no_thresholds: OptionValue<bool>,
    /// Skip the end-of-test summary.
    pub no_summary: OptionValue<bool>,
    /// Path for the JSON end-of-test summary export.
    pub summary_export: OptionValue<String>,
    /// Path the TLS stack should log session keys to.
    pub tls_key_log_file: OptionValue<String>,
    /// Variables injected into the executed script's runtime.
    pub env: EnvVars,
}
