// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Seeds through the deterministic CBOR encoder, and resuming a stream from a
//! persisted seed plus a draw count.

#![allow(missing_docs)]
use echo_prng::{Prng, Seed};

fn to_cbor<T: serde::Serialize>(value: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    ciborium::into_writer(value, &mut buf).expect("cbor encode");
    buf
}

#[test]
fn seed_round_trips_as_hex_strings() {
    let bytes = to_cbor(&Seed::REFERENCE);
    let decoded: Seed = ciborium::from_reader(bytes.as_slice()).expect("cbor decode");
    assert_eq!(decoded, Seed::REFERENCE);

    let value: ciborium::Value = ciborium::from_reader(bytes.as_slice()).expect("cbor value");
    let map = value.as_map().expect("seed is a map");
    let state = map
        .iter()
        .find(|(k, _)| k.as_text() == Some("state"))
        .and_then(|(_, v)| v.as_text())
        .expect("state is text");
    assert_eq!(state, "0x979c9a98d84620057d3e9cb6cfe0549b");
}

#[test]
fn persisted_seed_and_draw_count_resume_the_stream() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Resume {
        seed: Seed,
        drawn: u64,
    }

    let seed = Seed::from_label("resume");
    let mut live = Prng::from(seed);
    let mut drawn = 0_u64;
    for _ in 0..1_337 {
        live.next_u64();
        drawn += 1;
    }

    let bytes = to_cbor(&Resume { seed, drawn });
    let saved: Resume = ciborium::from_reader(bytes.as_slice()).expect("cbor decode");
    let mut resumed = Prng::from(saved.seed);
    resumed.skip(u128::from(saved.drawn));

    assert_eq!(resumed, live);
    for _ in 0..32 {
        assert_eq!(resumed.next_u64(), live.next_u64());
    }
}

#[test]
fn malformed_hex_seed_is_a_decode_error() {
    #[derive(serde::Serialize)]
    struct Forged {
        state: &'static str,
        stream: &'static str,
    }
    let bytes = to_cbor(&Forged {
        state: "0xnothex",
        stream: "0x1",
    });
    let err = ciborium::from_reader::<Seed, _>(bytes.as_slice()).expect_err("must reject");
    assert!(err.to_string().contains("nothex"), "{err}");
}
