//! Batch driver for the declaration normalizer.
//!
//! Usage:
//!   dts-publish `<input>` `<output>` [`<input>` `<output>` ...]
//!
//! Paths are consumed two at a time. Each input is read as UTF-8, normalized,
//! and written to its output path, replacing any existing file.

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command};
use dts_publish_config::Config;
use dts_publish_engine::{CatchAllPlacement, NormalizeOptions, io};
use std::path::{Path, PathBuf};
use std::process;

fn cli() -> Command {
    Command::new("dts-publish")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns generated ambient declaration files into publishable ones")
        .arg_required_else_help(true)
        .arg(
            Arg::new("paths")
                .help("Input and output paths, taken in pairs")
                .value_name("INPUT OUTPUT")
                .value_parser(clap::value_parser!(PathBuf))
                .num_args(1..)
                .required(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Config file (default: ~/.config/dts-publish/config.toml)"),
        )
        .arg(
            Arg::new("keep-comments")
                .long("keep-comments")
                .help("Keep block comments inside namespace bodies")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("catch-all")
                .long("catch-all")
                .value_name("PLACEMENT")
                .help("Where lines outside namespaces go")
                .value_parser(["leading", "trailing"]),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = cli().get_matches();

    init_logging(matches.get_count("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let paths: Vec<&PathBuf> = matches
        .get_many::<PathBuf>("paths")
        .map(|values| values.collect())
        .unwrap_or_default();
    let pairs = pair_up(&paths)?;

    let options = resolve_options(matches)?;
    log::debug!("normalize options: {options:?}");

    for (input, output) in pairs {
        let summary = io::normalize_file(input, output, &options).with_context(|| {
            format!(
                "Failed to normalize {} into {}",
                input.display(),
                output.display()
            )
        })?;
        log::info!(
            "{} -> {}: {} namespaces, {} catch-all lines, {} bytes",
            input.display(),
            output.display(),
            summary.namespaces,
            summary.catch_all_lines,
            summary.bytes_written
        );
    }

    Ok(())
}

fn pair_up<'a>(paths: &[&'a PathBuf]) -> Result<Vec<(&'a Path, &'a Path)>> {
    if paths.len() % 2 != 0 {
        bail!(
            "Expected input/output path pairs, got {} paths (last input has no output)",
            paths.len()
        );
    }
    Ok(paths
        .chunks(2)
        .map(|pair| (pair[0].as_path(), pair[1].as_path()))
        .collect())
}

/// Defaults, then the config file, then command-line flags.
fn resolve_options(matches: &ArgMatches) -> Result<NormalizeOptions> {
    let config = match matches.get_one::<String>("config") {
        Some(raw) => {
            let raw_path = PathBuf::from(raw);
            let path = Config::expand_path(&raw_path).unwrap_or(raw_path);
            let config = Config::load_from_path(&path)?;
            match config {
                Some(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                None => bail!("Config file not found: {}", path.display()),
            }
        }
        None => match Config::load()? {
            Some(config) => {
                log::info!("Loaded config from {}", Config::config_path().display());
                config
            }
            None => Config::default(),
        },
    };

    let mut options = config.normalize_options();
    if matches.get_flag("keep-comments") {
        options.strip_comments = false;
    }
    if let Some(placement) = matches.get_one::<String>("catch-all") {
        options.catch_all = match placement.as_str() {
            "trailing" => CatchAllPlacement::Trailing,
            _ => CatchAllPlacement::Leading,
        };
    }
    Ok(options)
}
