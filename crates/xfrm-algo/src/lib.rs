//! Algorithm descriptors for secure-traffic transforms.
//!
//! A transform applies an encryption, authentication, or combined
//! authenticated-encryption algorithm to protected traffic. This crate holds
//! the descriptor for one such algorithm: which algorithm is selected, the
//! secret key material, and the truncation/ICV length applied to the
//! algorithm's output. No cryptographic computation happens here; the crate
//! validates parameters once, stores them immutably, and moves them across
//! transport boundaries without leaking key bytes.
//!
//! # Validation and trust
//!
//! The validating constructors ([`AlgorithmDescriptor::new`] and
//! [`AlgorithmDescriptor::with_truncation`]) check the requested truncation
//! length against the per-algorithm rule table in
//! [`Algorithm::truncation_valid`] and reject anything outside it. The record
//! codec's [`AlgorithmDescriptor::decode`] is the opposite: it reconstructs a
//! descriptor from a previously serialized record and trusts the stored field
//! values, checking framing only. Keep untrusted parameters on the
//! constructor path.
//!
//! # Security
//!
//! - Key material is copied at every boundary crossing: into the descriptor
//!   at construction and out of it on every [`AlgorithmDescriptor::key`]
//!   call. No caller ever holds an alias of the internal buffer.
//! - Key bytes are zeroized when a descriptor is dropped.
//! - `Debug` formatting always redacts the key. Rendering it requires the
//!   explicit [`KeyVisibility::Reveal`] opt-in.
//!
//! Descriptors are deeply immutable after construction and safe to read from
//! any number of threads without synchronization.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod algorithm;
mod descriptor;
mod errors;
mod record;

pub use algorithm::{Algorithm, AlgorithmClass};
pub use descriptor::{AlgorithmDescriptor, DescriptorDisplay, KeyVisibility};
pub use errors::{AlgorithmError, RecordError};
