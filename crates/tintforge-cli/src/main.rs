//! `tintforge` - render a template group against a tree of color schemes.
//!
//! ```text
//! tintforge --schemes-dir ./schemes --template-dir ./my-app-theme
//! ```
//!
//! Every scheme file under `--schemes-dir` is loaded first; if any of them is
//! broken the build stops and all problems are printed. Otherwise every
//! template in `<template-dir>/templates/config.yaml` is rendered.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tintforge::{build, load_schemes, load_template_group, BuildOptions, BuildReport, DirTree};

/// Build base16/base24 theme files from color schemes and mustache templates
#[derive(Parser, Debug)]
#[command(name = "tintforge")]
#[command(version)]
struct Cli {
    /// Directory containing scheme files (searched recursively)
    #[arg(long, value_name = "DIR")]
    schemes_dir: PathBuf,

    /// Template group directory (the one holding `templates/config.yaml`)
    #[arg(long, value_name = "DIR", default_value = ".")]
    template_dir: PathBuf,

    /// Number of templates to render concurrently
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<BuildReport> {
    let tree = DirTree::new(&cli.schemes_dir);
    let schemes = load_schemes(&tree).with_context(|| {
        format!("failed to load schemes from {}", cli.schemes_dir.display())
    })?;

    let templates = load_template_group(&cli.template_dir).with_context(|| {
        format!(
            "failed to load template group {}",
            cli.template_dir.display()
        )
    })?;

    let options = BuildOptions { jobs: cli.jobs };
    let report = build(&templates, &schemes, &options).context("build failed")?;
    Ok(report)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            log::info!(
                "rendered {} templates, {} files written",
                report.rendered.len(),
                report.files_written()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
