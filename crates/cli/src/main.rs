//! `metalog-archive` — stream a consistent checkpoint/transaction-log
//! archive to stdout.
//!
//! The selection engine computes the minimal file set for the requested
//! retention count; an external archiver (tar by default) produces the
//! actual byte stream. Diagnostics go to stderr so stdout carries nothing
//! but the archive.
//!
//! Exit status: the archiver's own exit code on a normal run, 0 for a dry
//! run, 2 for selection or configuration errors.

mod driver;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use metalog_core::{build_plan, ArchiveConfig, ArchivePlan};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let config = matches_to_config(&matches);
    let json = matches.get_flag("json");

    match run(&config, json) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("metalog-archive: {e}");
            process::exit(2);
        }
    }
}

fn build_cli() -> Command {
    Command::new("metalog-archive")
        .about("Stream a consistent checkpoint/transaction-log archive to stdout")
        .arg(
            Arg::new("checkpoint-dir")
                .long("checkpoint-dir")
                .short('c')
                .value_name("DIR")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding chkpt.* files and the `latest` pointer"),
        )
        .arg(
            Arg::new("log-dir")
                .long("log-dir")
                .short('l')
                .value_name("DIR")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding log.* files and the `last` pointer"),
        )
        .arg(
            Arg::new("retain")
                .long("retain")
                .short('r')
                .value_name("COUNT")
                .default_value("1")
                .value_parser(value_parser!(u64).range(1..))
                .help("Number of most-recent checkpoints to archive"),
        )
        .arg(
            Arg::new("archiver")
                .long("archiver")
                .value_name("PATH")
                .default_value("tar")
                .value_parser(value_parser!(PathBuf))
                .help("Archiver binary invoked as `<archiver> -c -f - <files...>`"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .action(ArgAction::SetTrue)
                .help("Report the computed file list without invoking the archiver"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .requires("dry-run")
                .help("Report the dry-run plan as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Enable debug-level diagnostics on stderr"),
        )
        .arg(
            Arg::new("prune")
                .long("prune")
                .action(ArgAction::SetTrue)
                .hide(true)
                .help("Deprecated; accepted and ignored"),
        )
        .arg(
            Arg::new("keep-logs")
                .long("keep-logs")
                .value_name("COUNT")
                .value_parser(value_parser!(u64))
                .hide(true)
                .help("Deprecated; accepted and ignored"),
        )
}

fn matches_to_config(matches: &ArgMatches) -> ArchiveConfig {
    // clap enforces the 1.. range, so the fallback never fires.
    let retention = matches
        .get_one::<u64>("retain")
        .copied()
        .and_then(|r| NonZeroUsize::new(r as usize))
        .unwrap_or(NonZeroUsize::MIN);

    ArchiveConfig {
        checkpoint_dir: matches
            .get_one::<PathBuf>("checkpoint-dir")
            .cloned()
            .unwrap_or_default(),
        log_dir: matches.get_one::<PathBuf>("log-dir").cloned().unwrap_or_default(),
        retention,
        archiver: matches.get_one::<PathBuf>("archiver").cloned().unwrap_or_default(),
        dry_run: matches.get_flag("dry-run"),
        legacy_prune: matches.get_flag("prune"),
        legacy_keep_logs: matches.get_one::<u64>("keep-logs").copied(),
    }
}

fn run(config: &ArchiveConfig, json: bool) -> Result<i32, String> {
    let plan = build_plan(config).map_err(|e| e.to_string())?;

    if config.dry_run {
        report_plan(&plan, json)?;
        return Ok(0);
    }

    driver::run_archiver(&config.archiver, &plan.files)
        .map_err(|e| format!("failed to run archiver {}: {e}", config.archiver.display()))
}

fn report_plan(plan: &ArchivePlan, json: bool) -> Result<(), String> {
    if json {
        let rendered = serde_json::to_string_pretty(plan)
            .map_err(|e| format!("failed to render plan: {e}"))?;
        println!("{rendered}");
    } else {
        for file in &plan.files {
            println!("{}", file.display());
        }
        eprintln!("{}", plan.summary());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
