// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use echo_prng::Seed;

/// Print deterministic PRNG streams.
#[derive(Parser, Debug)]
#[command(name = "echo-prng", author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Seed as hex `STATE[:STREAM]` (defaults to the reference seed).
    #[arg(long, global = true, conflicts_with_all = ["label", "seed_file"])]
    pub seed: Option<Seed>,

    /// Derive the seed from a name instead of hex digits.
    #[arg(long, global = true, conflicts_with = "seed_file")]
    pub label: Option<String>,

    /// Read the seed from a JSON file `{ "state": "0x..", "stream": "0x.." }`.
    #[arg(long, global = true)]
    pub seed_file: Option<PathBuf>,

    /// Steps to skip after seeding; negative values rewind.
    #[arg(long, global = true, default_value_t = 0, allow_negative_numbers = true)]
    pub skip: i128,

    /// Number of outputs per section.
    #[arg(short = 'n', long, global = true, default_value_t = 100)]
    pub count: u32,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// How values are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// One value per line.
    Text,
    /// A JSON document.
    Json,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub(crate) enum Command {
    /// Raw 64-bit output words (hex).
    Words,
    /// Integers between two bounds.
    Range {
        /// First bound.
        #[arg(long, default_value_t = 64)]
        min: u64,
        /// Second bound.
        #[arg(long, default_value_t = 128)]
        max: u64,
    },
    /// Uniform reals in [0, 1) with 2^-52 spacing.
    Uniform,
    /// Uniform reals in [0, 1) reaching every representable double.
    Exact,
    /// Gaussian-shaped samples.
    Gaussian,
    /// Poisson counts.
    Poisson {
        /// Expected value (must be finite and >= 0).
        #[arg(long, default_value_t = 1.33333333)]
        mean: f64,
    },
    /// Every sampler in turn, rewinding `--count` steps between sections.
    ///
    /// The words, range and uniform sections replay the same words. The exact,
    /// gaussian and poisson sections come from the full-precision sampler.
    Demo {
        /// Poisson mean for the last section.
        #[arg(long, default_value_t = 1.33333333)]
        mean: f64,
    },
}
