// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-prng: deterministic 128-bit PCG engine for reproducible timelines.
//!
//! A [`Prng`] is a plain value holding a 128-bit affine recurrence
//! (`state' = state * M + increment mod 2^128`). Each draw advances the
//! recurrence once and whitens the new state into a 64-bit word; every other
//! sampler (bounded integers, uniform reals, Gaussian, Poisson) is built on
//! those words. [`Prng::skip`] moves the recurrence forwards or backwards by an
//! arbitrary number of steps in `O(log n)`.
//!
//! The generator is **not** cryptographically secure. It is meant for
//! simulation and replay, where identical seeds must yield identical streams on
//! every supported platform.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions
)]

mod distributions;
mod engine;
mod jump;
mod output;
mod range;
mod real;
mod seed;

#[cfg(feature = "rand_core")]
mod rand_compat;

// Re-exports for stable public API
/// The generator context and its fixed recurrence multiplier.
pub use engine::{Prng, MULTIPLIER};
/// Closed-form affine jump used by [`Prng::skip`].
pub use jump::advance_affine;
/// Output whitening permutation (128-bit state to 64-bit word).
pub use output::permute;
/// Seed material and its text parser.
pub use seed::{Seed, SeedField, SeedParseError};
