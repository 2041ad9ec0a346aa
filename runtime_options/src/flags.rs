//! Declares the runtime option flags and reads parsed values back out.

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, value_parser};

use crate::value::OptionValue;

pub(crate) const TYPE: &str = "type";
pub(crate) const COMPATIBILITY_MODE: &str = "compatibility-mode";
pub(crate) const INCLUDE_SYSTEM_ENV_VARS: &str = "include-system-env-vars";
pub(crate) const ENV: &str = "env";
pub(crate) const NO_THRESHOLDS: &str = "no-thresholds";
pub(crate) const NO_SUMMARY: &str = "no-summary";
pub(crate) const SUMMARY_EXPORT: &str = "summary-export";

/// Builds the runtime option arguments for an external [`clap::Command`].
///
/// Purely declarative: nothing is validated here. `include_system_env_vars`
/// supplies the caller-chosen default for the flag of the same name.
///
/// # Examples
///
/// ```
/// use runtime_options::flag_args;
///
/// let command = clap::Command::new("runner").args(flag_args(false));
/// let matches = command.get_matches_from(["runner", "--type", "js"]);
/// assert_eq!(
///     matches.get_one::<String>("type").map(String::as_str),
///     Some("js")
/// );
/// ```
#[must_use]
pub fn flag_args(include_system_env_vars: bool) -> Vec<Arg> {
    vec![
        bool_flag(INCLUDE_SYSTEM_ENV_VARS, include_system_env_vars)
            .help("pass the real system environment variables to the runtime"),
        Arg::new(COMPATIBILITY_MODE)
            .long(COMPATIBILITY_MODE)
            .value_name("MODE")
            .default_value("extended")
            .help("JavaScript compiler compatibility mode, \"extended\" or \"base\"")
            .long_help(
                "JavaScript compiler compatibility mode, \"extended\" or \"base\"\n\
                 base: the core JavaScript VM, supporting ES5.1+\n\
                 extended: base plus an ES2015 transpilation preset\n\
                 \tslower to compile in case the script uses syntax unsupported by base",
            ),
        Arg::new(TYPE)
            .long(TYPE)
            .short('t')
            .value_name("TYPE")
            .default_value("")
            .hide_default_value(true)
            .help("override test type, \"js\" or \"archive\""),
        Arg::new(ENV)
            .long(ENV)
            .short('e')
            .action(ArgAction::Append)
            .value_name("VAR=value")
            .help("add/override environment variable with VAR=value"),
        bool_flag(NO_THRESHOLDS, false).help("don't run thresholds"),
        bool_flag(NO_SUMMARY, false).help("don't show the summary at the end of the test"),
        Arg::new(SUMMARY_EXPORT)
            .long(SUMMARY_EXPORT)
            .value_name("FILE")
            .default_value("")
            .hide_default_value(true)
            .help("output the end-of-test summary report to JSON file"),
    ]
}

/// A boolean flag that may be passed bare (`--no-summary`) or with an
/// attached value (`--no-summary=false`), falling back to `default`.
fn bool_flag(name: &'static str, default: bool) -> Arg {
    Arg::new(name)
        .long(name)
        .value_parser(value_parser!(bool))
        .num_args(0..=1)
        .require_equals(true)
        .default_missing_value("true")
        .default_value(if default { "true" } else { "false" })
}

/// Reads a string option, marking it explicit only when the user passed the
/// flag on the command line.
pub(crate) fn option_string(matches: &ArgMatches, name: &str) -> OptionValue<String> {
    let value = matches.get_one::<String>(name).cloned().unwrap_or_default();
    OptionValue::new(value, set_on_command_line(matches, name))
}

/// Reads a boolean option, marking it explicit only when the user passed the
/// flag on the command line.
pub(crate) fn option_bool(matches: &ArgMatches, name: &str) -> OptionValue<bool> {
    let value = matches.get_one::<bool>(name).copied().unwrap_or_default();
    OptionValue::new(value, set_on_command_line(matches, name))
}

fn set_on_command_line(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}
