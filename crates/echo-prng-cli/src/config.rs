// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Seed resolution: flag, label, seed file, or the reference seed.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use echo_prng::{Prng, Seed};
use tracing::{debug, info};

use crate::cli::Cli;

/// Where the effective seed came from (logged for reproducibility).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SeedSource {
    Flag,
    Label,
    File,
    Reference,
}

pub(crate) fn load_seed_file(path: &Path) -> Result<Seed> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse seed file {}", path.display()))
}

pub(crate) fn resolve_seed(cli: &Cli) -> Result<(Seed, SeedSource)> {
    if let Some(seed) = cli.seed {
        return Ok((seed, SeedSource::Flag));
    }
    if let Some(label) = &cli.label {
        return Ok((Seed::from_label(label), SeedSource::Label));
    }
    if let Some(path) = &cli.seed_file {
        return Ok((load_seed_file(path)?, SeedSource::File));
    }
    Ok((Seed::REFERENCE, SeedSource::Reference))
}

/// Seeds the generator and applies `--skip` (two's complement for negatives).
///
/// Returns the seed alongside so it can be echoed in reports.
pub(crate) fn build_prng(cli: &Cli) -> Result<(Prng, Seed)> {
    let (seed, source) = resolve_seed(cli)?;
    info!(?source, %seed, "seed resolved");
    let mut prng = Prng::from(seed);
    if cli.skip != 0 {
        // Reinterpreting the signed count as u128 is the rewind encoding.
        #[allow(clippy::cast_sign_loss)]
        let delta = cli.skip as u128;
        debug!(skip = %cli.skip, "applying initial skip");
        prng.skip(delta);
    }
    Ok((prng, seed))
}
