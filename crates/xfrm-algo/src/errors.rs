//! Error types for descriptor validation and record decoding.
//!
//! Validation failures are caller bugs, reported synchronously from the
//! validating constructors and never retried. Record errors are the
//! lower-level framing failures of the transport path. Neither carries key
//! material in its message.

use thiserror::Error;

use crate::Algorithm;

/// Errors from validating construction of an
/// [`AlgorithmDescriptor`](crate::AlgorithmDescriptor).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// Algorithm identifier outside the supported set
    #[error("unknown algorithm: {name:?}")]
    UnknownAlgorithm {
        /// The identifier that failed to parse
        name: String,
    },

    /// Truncation length outside the algorithm's valid set or range
    #[error("invalid truncation length {requested} for {algorithm}")]
    InvalidTruncation {
        /// Algorithm whose rule table rejected the request
        algorithm: Algorithm,
        /// Raw requested truncation length, in bits
        requested: u32,
    },
}

/// Errors from decoding a serialized descriptor record.
///
/// These are framing failures only: the record path trusts field values and
/// performs no parameter re-validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Record ended before the current field was complete
    #[error("record truncated: need {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes required to finish the field being read
        needed: usize,
        /// Bytes actually remaining
        remaining: usize,
    },

    /// Algorithm name bytes are not valid UTF-8
    #[error("algorithm name is not valid UTF-8")]
    MalformedName,

    /// Record names an algorithm outside the supported set
    #[error("unknown algorithm in record: {name:?}")]
    UnknownAlgorithm {
        /// The unrecognized identifier
        name: String,
    },

    /// Claimed key length exceeds the wire bound
    #[error("key length {len} exceeds maximum {max}")]
    KeyTooLarge {
        /// Claimed key length, in bytes
        len: usize,
        /// Maximum key length the codec accepts
        max: usize,
    },
}
