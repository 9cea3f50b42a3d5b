// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sample generation for each subcommand.

use echo_prng::Prng;
use serde::{Serialize, Serializer};

use crate::cli::Command;

/// One generated value, kept typed until formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum Sample {
    /// Raw output word; serialized as 16 hex digits so JSON readers that parse
    /// numbers as doubles keep every bit.
    Word(#[serde(serialize_with = "serialize_word")] u64),
    Int(u64),
    Real(f64),
}

fn serialize_word<S: Serializer>(word: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{word:016x}"))
}

/// A titled run of samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Section {
    pub name: &'static str,
    pub samples: Vec<Sample>,
}

/// The sampler behind one section.
#[derive(Debug, Clone, Copy)]
enum Sampler {
    Words,
    Range(u64, u64),
    Uniform,
    Exact,
    Gaussian,
    Poisson(f64),
}

impl Sampler {
    fn name(self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Range(..) => "range",
            Self::Uniform => "uniform",
            Self::Exact => "exact",
            Self::Gaussian => "gaussian",
            Self::Poisson(_) => "poisson",
        }
    }

    fn sample(self, prng: &mut Prng) -> Sample {
        match self {
            Self::Words => Sample::Word(prng.next_u64()),
            Self::Range(a, b) => Sample::Int(prng.range(a, b)),
            Self::Uniform => Sample::Real(prng.next_f64()),
            Self::Exact => Sample::Real(prng.next_f64_exact()),
            Self::Gaussian => Sample::Real(prng.gaussian()),
            Self::Poisson(mean) => Sample::Int(prng.poisson(mean)),
        }
    }

    fn section(self, prng: &mut Prng, count: u32) -> Section {
        Section {
            name: self.name(),
            samples: (0..count).map(|_| self.sample(prng)).collect(),
        }
    }
}

/// Runs `command` against `prng`, producing one section (or six for `demo`).
pub(crate) fn run(command: Command, prng: &mut Prng, count: u32) -> Vec<Section> {
    let single = |sampler: Sampler, prng: &mut Prng| vec![sampler.section(prng, count)];
    match command {
        Command::Words => single(Sampler::Words, prng),
        Command::Range { min, max } => single(Sampler::Range(min, max), prng),
        Command::Uniform => single(Sampler::Uniform, prng),
        Command::Exact => single(Sampler::Exact, prng),
        Command::Gaussian => single(Sampler::Gaussian, prng),
        Command::Poisson { mean } => single(Sampler::Poisson(mean), prng),
        Command::Demo { mean } => {
            let samplers = [
                Sampler::Words,
                Sampler::Range(64, 128),
                Sampler::Uniform,
                Sampler::Exact,
                Sampler::Gaussian,
                Sampler::Poisson(mean),
            ];
            let mut sections = Vec::with_capacity(samplers.len());
            for (i, sampler) in samplers.into_iter().enumerate() {
                if i > 0 {
                    prng.rewind(u128::from(count));
                }
                sections.push(sampler.section(prng, count));
            }
            sections
        }
    }
}
