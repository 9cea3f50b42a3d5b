// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Seed material: the `(initstate, initseq)` pair handed to [`Prng::from_seed`].

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::engine::Prng;

/// Domain separator mixed into label-derived seeds.
const LABEL_DOMAIN: &[u8] = b"echo-prng/seed/v1\0";

/// Initial state material and stream selector for a [`Prng`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seed {
    /// Initial state material (`initstate`).
    #[cfg_attr(feature = "serde", serde(with = "hex_u128"))]
    pub state: u128,
    /// Stream selector (`initseq`); the top bit is discarded when seeding.
    #[cfg_attr(feature = "serde", serde(with = "hex_u128", default))]
    pub stream: u128,
}

impl Seed {
    /// Reference seed whose first output word is `0xfa0b7941ab4666e4`.
    pub const REFERENCE: Self = Self {
        state: 0x979c_9a98_d846_2005_7d3e_9cb6_cfe0_549b,
        stream: 0x5851_f42d_4c95_7f2d_1405_7b7e_f767_814f,
    };

    /// Creates a seed from its two halves.
    pub const fn new(state: u128, stream: u128) -> Self {
        Self { state, stream }
    }

    /// Derives a seed from a human-readable label.
    ///
    /// The label is hashed with BLAKE3 (domain-separated); the first 16 digest
    /// bytes become `state` and the last 16 become `stream`, both little-endian.
    /// Equal labels always name the same stream.
    pub fn from_label(label: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(LABEL_DOMAIN);
        hasher.update(label.as_bytes());
        let digest = hasher.finalize();
        let bytes = digest.as_bytes();
        let mut state = [0_u8; 16];
        let mut stream = [0_u8; 16];
        state.copy_from_slice(&bytes[..16]);
        stream.copy_from_slice(&bytes[16..]);
        Self {
            state: u128::from_le_bytes(state),
            stream: u128::from_le_bytes(stream),
        }
    }
}

impl From<Seed> for Prng {
    fn from(seed: Seed) -> Self {
        Self::from_seed(seed.state, seed.stream)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034x}:{:#034x}", self.state, self.stream)
    }
}

/// Which half of a seed string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedField {
    /// The `STATE` part.
    State,
    /// The `STREAM` part.
    Stream,
}

impl fmt::Display for SeedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State => f.write_str("state"),
            Self::Stream => f.write_str("stream"),
        }
    }
}

/// Errors produced when parsing a seed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedParseError {
    /// The input (or one of its halves) was empty.
    #[error("empty {0} in seed")]
    Empty(SeedField),
    /// More than one `:` separator.
    #[error("seed has more than two parts; expected STATE[:STREAM]")]
    TooManyParts,
    /// A half contained a non-hex digit or exceeded 128 bits.
    #[error("invalid hex {field} `{text}` in seed")]
    InvalidHex {
        /// Which half failed.
        field: SeedField,
        /// The offending text as given.
        text: String,
    },
}

fn parse_hex_u128(text: &str, field: SeedField) -> Result<u128, SeedParseError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return Err(SeedParseError::Empty(field));
    }
    u128::from_str_radix(&digits, 16).map_err(|_| SeedParseError::InvalidHex {
        field,
        text: text.to_owned(),
    })
}

/// Parses `STATE` or `STATE:STREAM`, both hexadecimal with an optional `0x`
/// prefix and `_` separators. A missing stream selects stream 0.
impl FromStr for Seed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let state_text = parts.next().unwrap_or_default();
        let stream_text = parts.next();
        if parts.next().is_some() {
            return Err(SeedParseError::TooManyParts);
        }
        let state = parse_hex_u128(state_text, SeedField::State)?;
        let stream = match stream_text {
            Some(text) => parse_hex_u128(text, SeedField::Stream)?,
            None => 0,
        };
        Ok(Self { state, stream })
    }
}

#[cfg(feature = "serde")]
mod hex_u128 {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{value:#x}"))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let text = String::deserialize(deserializer)?;
        let digits = text.strip_prefix("0x").unwrap_or(&text);
        u128::from_str_radix(digits, 16)
            .map_err(|_| D::Error::custom(format_args!("invalid 128-bit hex value `{text}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_state_and_stream() {
        let seed: Seed = "0x979c9a98d8462005_7d3e9cb6cfe0549b:5851F42D4C957F2D14057B7EF767814F"
            .parse()
            .expect("reference seed parses");
        assert_eq!(seed, Seed::REFERENCE);
    }

    #[test]
    fn missing_stream_defaults_to_zero() {
        assert_eq!("2a".parse::<Seed>(), Ok(Seed::new(42, 0)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Seed>(), Err(SeedParseError::Empty(SeedField::State)));
        assert_eq!("1:".parse::<Seed>(), Err(SeedParseError::Empty(SeedField::Stream)));
        assert_eq!("1:2:3".parse::<Seed>(), Err(SeedParseError::TooManyParts));
        assert_eq!(
            "xyz:1".parse::<Seed>(),
            Err(SeedParseError::InvalidHex {
                field: SeedField::State,
                text: "xyz".to_owned(),
            })
        );
        // 33 hex digits overflow 128 bits.
        let too_long = format!("1:{}", "f".repeat(33));
        assert!(matches!(
            too_long.parse::<Seed>(),
            Err(SeedParseError::InvalidHex {
                field: SeedField::Stream,
                ..
            })
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let text = Seed::REFERENCE.to_string();
        assert_eq!(text.parse::<Seed>(), Ok(Seed::REFERENCE));
    }

    #[test]
    fn labels_name_distinct_reproducible_streams() {
        let a = Seed::from_label("physics");
        assert_eq!(a, Seed::from_label("physics"));
        assert_ne!(a, Seed::from_label("audio"));
        assert_ne!(Prng::from(a).stream(), Prng::from(Seed::from_label("audio")).stream());
    }
}
