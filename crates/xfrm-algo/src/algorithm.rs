//! Supported transform algorithms and their truncation-length rules.
//!
//! The algorithm set is closed. Every identifier carries its own rule for
//! which truncation/ICV lengths are acceptable; the table in
//! [`Algorithm::truncation_valid`] is the single source of truth consulted
//! by the validating constructors.

use std::{fmt, str::FromStr};

use crate::errors::AlgorithmError;

/// An algorithm usable by a secure-traffic transform.
///
/// Each variant maps to a fixed wire identifier (see [`Algorithm::as_str`]).
/// Parsing an identifier outside this set fails; there is no escape hatch for
/// free-form names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// AES-CBC encryption.
    ///
    /// Valid lengths for this key are {128, 192, 256} bits.
    CbcAes,

    /// MD5 HMAC authentication. Not recommended for new configurations;
    /// provided for legacy compatibility with 3gpp infrastructure.
    ///
    /// Valid truncation lengths are 96 to 128 bits.
    HmacMd5,

    /// SHA1 HMAC authentication. Not recommended for new configurations;
    /// provided for legacy compatibility with 3gpp infrastructure.
    ///
    /// Valid truncation lengths are 96 to 160 bits.
    HmacSha1,

    /// SHA256 HMAC authentication.
    ///
    /// Valid truncation lengths are 96 to 256 bits.
    HmacSha256,

    /// SHA384 HMAC authentication.
    ///
    /// Valid truncation lengths are 192 to 384 bits.
    HmacSha384,

    /// SHA512 HMAC authentication.
    ///
    /// Valid truncation lengths are 256 to 512 bits.
    HmacSha512,

    /// AES-GCM combined authentication and encryption (RFC 4106).
    ///
    /// Keying material is an AES key followed by a 32-bit salt, giving valid
    /// key lengths of {160, 224, 288} bits. Per RFC 4106 section 8.1 the salt
    /// must be unique per invocation with the same key.
    ///
    /// Valid ICV (truncation) lengths are {64, 96, 128} bits.
    GcmAes,
}

/// Broad capability class of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmClass {
    /// Confidentiality only
    Encryption,
    /// Integrity only
    Authentication,
    /// Combined confidentiality and integrity
    AuthenticatedEncryption,
}

impl Algorithm {
    /// Every supported algorithm, in wire-name order.
    pub const ALL: [Self; 7] = [
        Self::CbcAes,
        Self::HmacMd5,
        Self::HmacSha1,
        Self::HmacSha256,
        Self::HmacSha384,
        Self::HmacSha512,
        Self::GcmAes,
    ];

    /// Wire identifier for this algorithm.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CbcAes => "cbc(aes)",
            Self::HmacMd5 => "hmac(md5)",
            Self::HmacSha1 => "hmac(sha1)",
            Self::HmacSha256 => "hmac(sha256)",
            Self::HmacSha384 => "hmac(sha384)",
            Self::HmacSha512 => "hmac(sha512)",
            Self::GcmAes => "rfc4106(gcm(aes))",
        }
    }

    /// Capability class of this algorithm.
    #[must_use]
    pub fn class(self) -> AlgorithmClass {
        match self {
            Self::CbcAes => AlgorithmClass::Encryption,
            Self::HmacMd5
            | Self::HmacSha1
            | Self::HmacSha256
            | Self::HmacSha384
            | Self::HmacSha512 => AlgorithmClass::Authentication,
            Self::GcmAes => AlgorithmClass::AuthenticatedEncryption,
        }
    }

    /// Whether `trunc_len_bits` is an acceptable truncation/ICV length for
    /// this algorithm.
    ///
    /// Ciphers and AEAD use enumerated sets; HMACs use inclusive ranges up to
    /// the digest length.
    #[must_use]
    pub fn truncation_valid(self, trunc_len_bits: u32) -> bool {
        match self {
            Self::CbcAes => matches!(trunc_len_bits, 128 | 192 | 256),
            Self::HmacMd5 => (96..=128).contains(&trunc_len_bits),
            Self::HmacSha1 => (96..=160).contains(&trunc_len_bits),
            Self::HmacSha256 => (96..=256).contains(&trunc_len_bits),
            Self::HmacSha384 => (192..=384).contains(&trunc_len_bits),
            Self::HmacSha512 => (256..=512).contains(&trunc_len_bits),
            Self::GcmAes => matches!(trunc_len_bits, 64 | 96 | 128),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cbc(aes)" => Ok(Self::CbcAes),
            "hmac(md5)" => Ok(Self::HmacMd5),
            "hmac(sha1)" => Ok(Self::HmacSha1),
            "hmac(sha256)" => Ok(Self::HmacSha256),
            "hmac(sha384)" => Ok(Self::HmacSha384),
            "hmac(sha512)" => Ok(Self::HmacSha512),
            "rfc4106(gcm(aes))" => Ok(Self::GcmAes),
            _ => Err(AlgorithmError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}
