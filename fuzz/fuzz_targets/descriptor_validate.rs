//! Fuzz target for validating construction
//!
//! # Strategy
//!
//! - Name: arbitrary strings, only a handful of which parse to an algorithm
//! - Key: arbitrary length and content, including empty and oversized
//! - Truncation: absent (defaulted) or arbitrary u32, including boundaries
//!
//! # Invariants
//!
//! - Construction MUST NOT panic for any input
//! - A constructed descriptor that fits the wire bound MUST round-trip
//!   through the record codec unchanged

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xfrm_algo::{Algorithm, AlgorithmDescriptor};

#[derive(Debug, Arbitrary)]
struct ConstructionInput {
    name: String,
    key: Vec<u8>,
    trunc_len_bits: Option<u32>,
}

fuzz_target!(|input: ConstructionInput| {
    let Ok(algorithm) = input.name.parse::<Algorithm>() else {
        return;
    };

    let result = match input.trunc_len_bits {
        Some(bits) => AlgorithmDescriptor::with_truncation(algorithm, &input.key, bits),
        None => AlgorithmDescriptor::new(algorithm, &input.key),
    };

    if let Ok(descriptor) = result {
        let mut wire = Vec::new();
        if descriptor.encode(&mut wire).is_ok() {
            let decoded = AlgorithmDescriptor::decode(&wire).expect("encoded record must decode");
            assert_eq!(decoded, descriptor);
        }
    }
});
