//! Fuzz target for `AlgorithmDescriptor::decode`
//!
//! This fuzzer feeds arbitrary byte sequences to the record decoder to find:
//! - Parser crashes or panics
//! - Integer overflows in length handling
//! - Buffer over-reads
//! - Hostile length prefixes that force large allocations
//!
//! The fuzzer should NEVER panic. All invalid inputs should return an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use xfrm_algo::AlgorithmDescriptor;

fuzz_target!(|data: &[u8]| {
    // Attempt to decode arbitrary bytes as a descriptor record.
    // This should never panic, only return Err for invalid data.
    let _ = AlgorithmDescriptor::decode(data);
});
