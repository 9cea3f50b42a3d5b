// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-prng CLI
//!
//! Prints reference streams from the Echo PRNG: raw words, bounded integers,
//! both uniform real samplers, Gaussian and Poisson samples, or all of them in
//! sequence (`demo`). Values go to stdout; logs go to stderr.

mod cli;
mod commands;
mod config;
mod output;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let (mut prng, seed) = config::build_prng(&cli)?;
    debug!(command = ?cli.command, count = cli.count, "generating");
    let sections = commands::run(cli.command, &mut prng, cli.count);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::render(&mut out, cli.format, &seed.to_string(), &sections)
}
