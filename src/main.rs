// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use std::ops::ControlFlow;
use std::process::ExitCode;
use word_count::args::Args;
use word_count::config::Config;
use word_count::presentation;
use word_count_engine::source::resource_names;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    if args.list_resources {
        for name in resource_names() {
            println!("{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::try_from(args).context("invalid arguments")?;

    if config.watch {
        word_count_engine::watch::watch_loop(&config, |session| {
            if let Err(e) = presentation::print_watch_update(session, &config) {
                log::error!("failed to print update: {e}");
            }
            ControlFlow::Continue(())
        })
        .context("watch failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    let result = word_count_engine::run(&config).context("analysis failed")?;
    for (source, err) in &result.errors {
        eprintln!("Error processing {source}: {err}");
    }

    presentation::print_results(&result.stats, &config).context("failed to print results")?;

    if result.errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
