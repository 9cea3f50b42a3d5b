// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rendering sections to a writer.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::cli::Format;
use crate::commands::{Sample, Section};

#[derive(Serialize)]
struct Report<'a> {
    seed: String,
    sections: &'a [Section],
}

fn write_sample(out: &mut impl Write, sample: Sample) -> std::io::Result<()> {
    match sample {
        Sample::Word(word) => writeln!(out, "{word:016x}"),
        Sample::Int(value) => writeln!(out, "{value}"),
        // `{:e}` keeps tiny exact-sampler outputs readable and lossless.
        Sample::Real(value) => writeln!(out, "{value:e}"),
    }
}

/// Writes `sections` in `format`.
///
/// Text output prints bare values for a single section and `# name` headers
/// between sections otherwise.
pub(crate) fn render(
    out: &mut impl Write,
    format: Format,
    seed: &str,
    sections: &[Section],
) -> Result<()> {
    match format {
        Format::Text => {
            let headers = sections.len() > 1;
            for section in sections {
                if headers {
                    writeln!(out, "# {}", section.name)?;
                }
                for &sample in &section.samples {
                    write_sample(out, sample)?;
                }
            }
        }
        Format::Json => {
            let report = Report {
                seed: seed.to_owned(),
                sections,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
