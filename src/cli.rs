// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;
use std::{env, ffi::OsString, path::PathBuf};

use crate::{
    core::{
        config::{LauncherConfig, Settings},
        execution::{LaunchPlan, launch},
        models::Invocation,
    },
    infra::{fs, t},
};

/// Launcher options that consume the following token as their value.
const VALUE_OPTIONS: &[&str] = &["-r", "--reporter", "-o", "--output-dir", "-c", "--config", "--lang"];

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
///
/// Only the launcher's own options are scanned: the scan stops at the
/// executable, so a `--lang` meant for the test executable is never picked up.
pub fn pre_parse_language(args: &[OsString]) -> Option<String> {
    let mut tokens = args.iter().skip(1).map(|arg| arg.to_string_lossy());

    while let Some(token) = tokens.next() {
        if token == "--lang" {
            return tokens.next().map(|lang| lang.into_owned());
        }
        if let Some(lang) = token.strip_prefix("--lang=") {
            return Some(lang.to_string());
        }
        if VALUE_OPTIONS.contains(&&*token) {
            tokens.next();
        } else if token == "--" || !token.starts_with('-') {
            break;
        }
    }
    None
}

pub fn build_cli() -> Command {
    Command::new("catch-launcher")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about").to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang").to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("reporter")
                .short('r')
                .long("reporter")
                .help(t!("arg.reporter").to_string())
                .value_name("NAME")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help(t!("arg.output_dir").to_string())
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg.config").to_string())
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help(t!("arg.dry_run").to_string())
                .action(ArgAction::SetTrue),
        )
        // The executable and its arguments share one positional so that
        // everything after the executable, hyphenated or not, is forwarded.
        .arg(
            Arg::new("command")
                .help(format!("{}. {}", t!("arg.executable"), t!("arg.args")))
                .value_name("EXECUTABLE [ARGS]")
                .required(true)
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(OsString))
                .action(ArgAction::Append),
        )
}

/// Assembles the `Invocation` from parsed arguments, the environment and the
/// optional config file.
pub fn invocation_from_matches(matches: &ArgMatches, env_settings: Settings) -> Result<Invocation> {
    let mut command = matches
        .get_many::<OsString>("command")
        .map(|values| values.cloned().collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter();
    // clap guarantees at least one value
    let executable = PathBuf::from(command.next().unwrap_or_default());
    let extra_args: Vec<OsString> = command.collect();

    let file_config = match matches.get_one::<PathBuf>("config") {
        Some(path) => LauncherConfig::load(path)?,
        None => LauncherConfig::default(),
    };
    if matches.get_one::<String>("lang").is_none() {
        if let Some(language) = &file_config.language {
            crate::init(Some(language));
        }
    }

    let cli_settings = Settings::new(
        matches.get_one::<String>("reporter").cloned(),
        matches.get_one::<PathBuf>("output-dir").cloned(),
    );
    let mut settings = cli_settings.or(env_settings).or(Settings::from(&file_config));
    settings.output_dir = settings.output_dir.map(|dir| fs::expand_home(&dir));

    Ok(Invocation::new(executable, extra_args, settings))
}

/// Parses the command line, runs the test executable and returns the exit
/// code the launcher should terminate with.
pub async fn run() -> Result<i32> {
    let args: Vec<OsString> = env::args_os().collect();

    // Pre-parse language and initialize i18n first.
    crate::init(pre_parse_language(&args).as_deref());

    let matches = build_cli().get_matches_from(args);
    let invocation = invocation_from_matches(&matches, Settings::from_env())?;
    tracing::debug!(?invocation, "resolved invocation");

    if matches.get_flag("dry-run") {
        let plan = LaunchPlan::for_invocation(&invocation)?;
        println!("{} {}", t!("launch.command_prefix").blue(), plan.command_line());
        return Ok(0);
    }

    let outcome = launch(&invocation).await?;
    Ok(outcome.exit_code())
}

/// Prints a fatal launcher error to stderr.
pub fn report_error(error: &anyhow::Error) {
    eprintln!("{} {:#}", t!("error_prefix").red().bold(), error);
}
