//! Resolution of runtime options from parsed flags and the environment.

use clap::ArgMatches;

use crate::compat::CompatibilityMode;
use crate::env;
use crate::error::OptionsError;
use crate::flags;
use crate::options::{EnvVars, RuntimeOptions};
use crate::value::OptionValue;

const TYPE_VAR: &str = "K6_TYPE";
const COMPATIBILITY_MODE_VAR: &str = "K6_COMPATIBILITY_MODE";
const INCLUDE_SYSTEM_ENV_VARS_VAR: &str = "K6_INCLUDE_SYSTEM_ENV_VARS";
const NO_THRESHOLDS_VAR: &str = "K6_NO_THRESHOLDS";
const NO_SUMMARY_VAR: &str = "K6_NO_SUMMARY";
const SUMMARY_EXPORT_VAR: &str = "K6_SUMMARY_EXPORT";
const TLS_KEY_LOG_FILE_VAR: &str = "SSLKEYLOGFILE";

/// Resolves the final runtime options from parsed flags and an environment
/// snapshot.
///
/// Precedence per scalar option, highest first: an explicit command-line
/// flag, the option's environment variable, the schema default. The snapshot
/// is read-only; the returned aggregate owns its `env` mapping. Explicit
/// `--env` entries are applied last and override same-named entries copied
/// from the system environment.
///
/// # Errors
///
/// Returns an [`OptionsError`] when an environment boolean does not parse,
/// the merged compatibility mode is unknown, or an explicit `--env` entry is
/// malformed or illegally named. An illegal name encountered while copying
/// the system environment is not fatal: the entry is dropped with a warning.
///
/// # Panics
///
/// Panics if `matches` was not built with the arguments from
/// [`crate::flag_args`].
pub fn resolve(
    matches: &ArgMatches,
    environment: &EnvVars,
) -> Result<RuntimeOptions, OptionsError> {
    let mut options = RuntimeOptions {
        test_type: flags::option_string(matches, flags::TYPE),
        compatibility_mode: flags::option_string(matches, flags::COMPATIBILITY_MODE),
        include_system_env_vars: flags::option_bool(matches, flags::INCLUDE_SYSTEM_ENV_VARS),
        no_thresholds: flags::option_bool(matches, flags::NO_THRESHOLDS),
        no_summary: flags::option_bool(matches, flags::NO_SUMMARY),
        summary_export: flags::option_string(matches, flags::SUMMARY_EXPORT),
        tls_key_log_file: OptionValue::fallback(String::new()),
        env: EnvVars::new(),
    };

    overlay_string(&mut options.test_type, environment, TYPE_VAR);
    overlay_string(
        &mut options.compatibility_mode,
        environment,
        COMPATIBILITY_MODE_VAR,
    );
    options.compatibility_mode.value().parse::<CompatibilityMode>()?;

    overlay_bool(
        &mut options.include_system_env_vars,
        environment,
        INCLUDE_SYSTEM_ENV_VARS_VAR,
    )?;
    overlay_bool(&mut options.no_thresholds, environment, NO_THRESHOLDS_VAR)?;
    overlay_bool(&mut options.no_summary, environment, NO_SUMMARY_VAR)?;

    overlay_string(&mut options.summary_export, environment, SUMMARY_EXPORT_VAR);
    overlay_string(
        &mut options.tls_key_log_file,
        environment,
        TLS_KEY_LOG_FILE_VAR,
    );

    if *options.include_system_env_vars.value() {
        copy_system_env(&mut options.env, environment);
    }
    apply_env_entries(&mut options.env, matches)?;

    Ok(options)
}

/// Overlays an environment value onto a string option left unset by the
/// command line.
fn overlay_string(option: &mut OptionValue<String>, environment: &EnvVars, name: &str) {
    if let Some(value) = environment.get(name) {
        option.set_if_unset(value.clone());
    }
}

/// Overlays an environment value onto a boolean option left unset by the
/// command line.
///
/// A present value must parse as a boolean literal even when the flag was
/// set explicitly; a malformed value aborts resolution.
fn overlay_bool(
    option: &mut OptionValue<bool>,
    environment: &EnvVars,
    name: &str,
) -> Result<(), OptionsError> {
    let Some(raw) = environment.get(name) else {
        return Ok(());
    };
    let value = env::parse_bool(raw).ok_or_else(|| OptionsError::BoolParsing {
        name: name.to_owned(),
        value: raw.clone(),
    })?;
    option.set_if_unset(value);
    Ok(())
}

/// Copies the environment snapshot into the runtime's variables, dropping
/// entries with illegal names.
fn copy_system_env(dest: &mut EnvVars, environment: &EnvVars) {
    for (name, value) in environment {
        if env::is_legal_name(name) {
            dest.insert(name.clone(), value.clone());
        } else {
            tracing::warn!(name = %name, "invalid system environment variable name");
        }
    }
}

/// Applies explicit `--env VAR=value` entries on top of whatever bulk
/// inclusion produced. Last writer wins for a repeated key.
fn apply_env_entries(dest: &mut EnvVars, matches: &ArgMatches) -> Result<(), OptionsError> {
    let Some(entries) = matches.get_many::<String>(flags::ENV) else {
        return Ok(());
    };
    for entry in entries {
        let (name, value) = env::split_assignment(entry)?;
        dest.insert(name.to_owned(), value.to_owned());
    }
    Ok(())
}
