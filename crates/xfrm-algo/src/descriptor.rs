//! Immutable algorithm descriptors with validated parameters.

use std::fmt;

use zeroize::Zeroize;

use crate::{Algorithm, errors::AlgorithmError};

/// Placeholder rendered in place of key material.
const REDACTED: &str = "<redacted>";

/// A single validated algorithm configuration for a transform.
///
/// Holds the algorithm identity, the secret key material, and the number of
/// bits of algorithm output actually used (the truncation/ICV length).
/// Instances are immutable once constructed; validation runs exactly once, in
/// the constructors.
///
/// # Invariants
///
/// - The truncation length supplied by the caller satisfies the algorithm's
///   rule table ([`Algorithm::truncation_valid`]). The raw requested value is
///   what gets validated; clamping happens afterwards.
/// - The stored truncation length never exceeds the key bit-length.
/// - Key material is exclusively owned, never aliased: the construction input
///   is copied in, and [`key()`](Self::key) hands out a fresh copy on every
///   call.
///
/// # Security
///
/// - Key bytes are zeroized when the descriptor is dropped.
/// - `Debug` output always redacts the key. Hex key material is only
///   available through [`display_with`](Self::display_with) under an explicit
///   [`KeyVisibility::Reveal`].
#[derive(Clone)]
pub struct AlgorithmDescriptor {
    algorithm: Algorithm,
    key: Vec<u8>,
    trunc_len_bits: u32,
}

impl AlgorithmDescriptor {
    /// Create a descriptor whose truncation length is the full key
    /// bit-length.
    ///
    /// The defaulted length is validated like any caller-supplied value, so a
    /// key whose bit-length is outside the algorithm's rule table is rejected
    /// here even though no explicit truncation was requested.
    ///
    /// # Errors
    ///
    /// - `AlgorithmError::InvalidTruncation` if the key bit-length is outside
    ///   the algorithm's valid set or range
    pub fn new(algorithm: Algorithm, key: &[u8]) -> Result<Self, AlgorithmError> {
        Self::with_truncation(algorithm, key, key_bits(key))
    }

    /// Create a descriptor with an explicit truncation length.
    ///
    /// The raw requested value is checked against the algorithm's rule table
    /// first; only the stored value is clamped to the key bit-length. An
    /// in-range request larger than the key is therefore accepted and
    /// clamped, while an out-of-range request is rejected even when clamping
    /// would have produced an acceptable value.
    ///
    /// # Errors
    ///
    /// - `AlgorithmError::InvalidTruncation` if `trunc_len_bits` is outside
    ///   the algorithm's valid set or range
    pub fn with_truncation(
        algorithm: Algorithm,
        key: &[u8],
        trunc_len_bits: u32,
    ) -> Result<Self, AlgorithmError> {
        if !algorithm.truncation_valid(trunc_len_bits) {
            return Err(AlgorithmError::InvalidTruncation { algorithm, requested: trunc_len_bits });
        }

        Ok(Self {
            algorithm,
            key: key.to_vec(),
            trunc_len_bits: trunc_len_bits.min(key_bits(key)),
        })
    }

    /// Rebuild a descriptor from the fields of an already-serialized record.
    ///
    /// Skips truncation validation entirely; only the record codec may call
    /// this, keeping the trusting path out of the public API.
    pub(crate) fn from_trusted_parts(
        algorithm: Algorithm,
        key: Vec<u8>,
        trunc_len_bits: u32,
    ) -> Self {
        Self { algorithm, key, trunc_len_bits }
    }

    /// The configured algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Wire identifier of the configured algorithm.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.algorithm.as_str()
    }

    /// The secret key material.
    ///
    /// Returns a fresh copy on every call; mutating the returned buffer never
    /// affects the descriptor.
    #[must_use]
    pub fn key(&self) -> Vec<u8> {
        self.key.clone()
    }

    /// Stored truncation length, in bits.
    ///
    /// This is the clamped value: at most the key bit-length, regardless of
    /// what was requested at construction.
    #[must_use]
    pub fn truncation_len_bits(&self) -> u32 {
        self.trunc_len_bits
    }

    /// Borrow the key for same-crate readers (the record codec, formatting).
    pub(crate) fn key_slice(&self) -> &[u8] {
        &self.key
    }

    /// Formatting adapter that renders the key only under
    /// [`KeyVisibility::Reveal`].
    #[must_use]
    pub fn display_with(&self, visibility: KeyVisibility) -> DescriptorDisplay<'_> {
        DescriptorDisplay { descriptor: self, visibility }
    }
}

impl Drop for AlgorithmDescriptor {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl PartialEq for AlgorithmDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm
            && self.key == other.key
            && self.trunc_len_bits == other.trunc_len_bits
    }
}

impl Eq for AlgorithmDescriptor {}

// Manual Debug implementation: the derived one would print key bytes.
impl fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("algorithm", &self.algorithm)
            .field("key", &format_args!("{REDACTED}"))
            .field("trunc_len_bits", &self.trunc_len_bits)
            .finish()
    }
}

/// Whether diagnostics may include raw key material.
///
/// The default never reveals secrets. `Reveal` exists for debug-enabled
/// builds and test tooling; production log paths must not pass it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyVisibility {
    /// Replace key bytes with a redaction placeholder.
    #[default]
    Redact,
    /// Render key bytes as hexadecimal.
    Reveal,
}

/// Human-readable rendering of a descriptor, returned by
/// [`AlgorithmDescriptor::display_with`].
pub struct DescriptorDisplay<'a> {
    descriptor: &'a AlgorithmDescriptor,
    visibility: KeyVisibility,
}

impl fmt::Display for DescriptorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let descriptor = self.descriptor;
        write!(f, "{{name={}, key=", descriptor.algorithm)?;
        match self.visibility {
            KeyVisibility::Redact => f.write_str(REDACTED)?,
            KeyVisibility::Reveal => f.write_str(&hex::encode(descriptor.key_slice()))?,
        }
        write!(f, ", trunc_len_bits={}}}", descriptor.trunc_len_bits)
    }
}

/// Bit-length of a key, saturating at `u32::MAX`.
fn key_bits(key: &[u8]) -> u32 {
    u32::try_from(key.len().saturating_mul(8)).unwrap_or(u32::MAX)
}
