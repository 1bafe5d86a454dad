//! Wire record codec for algorithm descriptors.
//!
//! A descriptor serializes to an ordered triple, big-endian:
//!
//! ```text
//! [name_len: u16][name: UTF-8][key_len: u32][key][trunc_len_bits: u32]
//! ```
//!
//! Decoding is the trusted-transport reconstruction path. It verifies framing
//! only (field boundaries, UTF-8 name, key-length bound) and does not re-run
//! truncation validation: a record written from a valid descriptor is taken
//! at face value. Untrusted parameters belong on the validating constructor
//! path instead.

use bytes::BufMut;

use crate::{Algorithm, AlgorithmDescriptor, errors::RecordError};

impl AlgorithmDescriptor {
    /// Maximum key length accepted on the wire, in bytes.
    ///
    /// Key length is caller/attacker-controlled; bounding it at the codec
    /// boundary keeps a hostile length prefix from forcing a large
    /// allocation. Four times the largest expected key (64 bytes for
    /// HMAC-SHA512) leaves room without being open-ended.
    pub const MAX_KEY_LEN: usize = 256;

    /// Encode this descriptor into `dst`.
    ///
    /// # Errors
    ///
    /// - `RecordError::KeyTooLarge` if the key exceeds
    ///   [`MAX_KEY_LEN`](Self::MAX_KEY_LEN)
    pub fn encode(&self, dst: &mut impl BufMut) -> Result<(), RecordError> {
        let key = self.key_slice();
        if key.len() > Self::MAX_KEY_LEN {
            return Err(RecordError::KeyTooLarge { len: key.len(), max: Self::MAX_KEY_LEN });
        }

        let name = self.algorithm().as_str().as_bytes();
        // INVARIANT: wire identifiers are fixed short strings; the longest,
        // "rfc4106(gcm(aes))", is 17 bytes.
        dst.put_u16(name.len() as u16);
        dst.put_slice(name);

        dst.put_u32(key.len() as u32);
        dst.put_slice(key);

        dst.put_u32(self.truncation_len_bits());

        Ok(())
    }

    /// Exact number of bytes [`encode`](Self::encode) writes.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        2 + self.algorithm().as_str().len() + 4 + self.key_slice().len() + 4
    }

    /// Decode a descriptor from its wire record.
    ///
    /// Bytes beyond the record are ignored; the record is self-delimiting.
    ///
    /// # Errors
    ///
    /// - `RecordError::Truncated` if any field ends early
    /// - `RecordError::MalformedName` if the name bytes are not UTF-8
    /// - `RecordError::UnknownAlgorithm` if the name is outside the supported
    ///   set
    /// - `RecordError::KeyTooLarge` if the claimed key length exceeds
    ///   [`MAX_KEY_LEN`](Self::MAX_KEY_LEN)
    ///
    /// # Security
    ///
    /// - The key-length claim is checked before any allocation.
    /// - Field values are trusted once framing checks pass; in particular the
    ///   truncation length is NOT validated against the algorithm's rule
    ///   table. Do not feed attacker-controlled records through this path and
    ///   then rely on the construction invariants.
    pub fn decode(bytes: &[u8]) -> Result<Self, RecordError> {
        let (name_len, rest) = read_u16(bytes)?;
        let (name, rest) = read_slice(rest, name_len as usize)?;
        let name = std::str::from_utf8(name).map_err(|_| RecordError::MalformedName)?;
        let algorithm = name
            .parse::<Algorithm>()
            .map_err(|_| RecordError::UnknownAlgorithm { name: name.to_string() })?;

        let (key_len, rest) = read_u32(rest)?;
        let key_len = key_len as usize;
        if key_len > Self::MAX_KEY_LEN {
            return Err(RecordError::KeyTooLarge { len: key_len, max: Self::MAX_KEY_LEN });
        }
        let (key, rest) = read_slice(rest, key_len)?;

        let (trunc_len_bits, _rest) = read_u32(rest)?;

        Ok(Self::from_trusted_parts(algorithm, key.to_vec(), trunc_len_bits))
    }
}

fn read_slice(bytes: &[u8], len: usize) -> Result<(&[u8], &[u8]), RecordError> {
    if bytes.len() < len {
        return Err(RecordError::Truncated { needed: len, remaining: bytes.len() });
    }
    Ok(bytes.split_at(len))
}

fn read_u16(bytes: &[u8]) -> Result<(u16, &[u8]), RecordError> {
    let (head, rest) = read_slice(bytes, 2)?;
    let mut buf = [0u8; 2];
    buf.copy_from_slice(head);
    Ok((u16::from_be_bytes(buf), rest))
}

fn read_u32(bytes: &[u8]) -> Result<(u32, &[u8]), RecordError> {
    let (head, rest) = read_slice(bytes, 4)?;
    let mut buf = [0u8; 4];
    buf.copy_from_slice(head);
    Ok((u32::from_be_bytes(buf), rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AlgorithmDescriptor {
        AlgorithmDescriptor::with_truncation(Algorithm::HmacSha256, &[0x11u8; 32], 128).unwrap()
    }

    #[test]
    fn encode_decode_round_trip() {
        let descriptor = sample();

        let mut wire = Vec::new();
        descriptor.encode(&mut wire).unwrap();
        assert_eq!(wire.len(), descriptor.encoded_len());

        let decoded = AlgorithmDescriptor::decode(&wire).unwrap();
        assert_eq!(decoded, descriptor);
    }

    #[test]
    fn wire_layout_is_the_ordered_triple() {
        let key = [0xA5u8; 12];
        let descriptor =
            AlgorithmDescriptor::with_truncation(Algorithm::HmacMd5, &key, 96).unwrap();

        let mut wire = Vec::new();
        descriptor.encode(&mut wire).unwrap();

        assert_eq!(&wire[0..2], &[0, 9]);
        assert_eq!(&wire[2..11], b"hmac(md5)");
        assert_eq!(&wire[11..15], &[0, 0, 0, 12]);
        assert_eq!(&wire[15..27], &[0xA5; 12]);
        assert_eq!(&wire[27..31], &[0, 0, 0, 96]);
        assert_eq!(wire.len(), 31);
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let descriptor = sample();

        let mut wire = Vec::new();
        descriptor.encode(&mut wire).unwrap();
        wire.extend_from_slice(&[0xDE, 0xAD]);

        assert_eq!(AlgorithmDescriptor::decode(&wire).unwrap(), descriptor);
    }

    #[test]
    fn decode_rejects_every_strict_prefix() {
        let descriptor = sample();

        let mut wire = Vec::new();
        descriptor.encode(&mut wire).unwrap();

        for len in 0..wire.len() {
            let result = AlgorithmDescriptor::decode(&wire[..len]);
            assert!(
                matches!(result, Err(RecordError::Truncated { .. })),
                "prefix of {len} bytes must be rejected as truncated"
            );
        }
    }

    #[test]
    fn decode_rejects_unknown_name() {
        let mut wire = Vec::new();
        wire.put_u16(8);
        wire.put_slice(b"cbc(des)");
        wire.put_u32(0);
        wire.put_u32(64);

        let err = AlgorithmDescriptor::decode(&wire).unwrap_err();
        assert_eq!(err, RecordError::UnknownAlgorithm { name: "cbc(des)".to_string() });
    }

    #[test]
    fn decode_rejects_non_utf8_name() {
        let mut wire = Vec::new();
        wire.put_u16(2);
        wire.put_slice(&[0xFF, 0xFE]);
        wire.put_u32(0);
        wire.put_u32(0);

        assert_eq!(AlgorithmDescriptor::decode(&wire).unwrap_err(), RecordError::MalformedName);
    }

    #[test]
    fn decode_bounds_claimed_key_length() {
        // A hostile record claiming a 4 GB key must be rejected before any
        // allocation happens.
        let mut wire = Vec::new();
        wire.put_u16(9);
        wire.put_slice(b"hmac(md5)");
        wire.put_u32(u32::MAX);

        let err = AlgorithmDescriptor::decode(&wire).unwrap_err();
        assert_eq!(
            err,
            RecordError::KeyTooLarge {
                len: u32::MAX as usize,
                max: AlgorithmDescriptor::MAX_KEY_LEN
            }
        );
    }

    #[test]
    fn decode_does_not_revalidate_truncation() {
        // An 8-bit truncation for HMAC-SHA256 would never pass the validating
        // constructors; the trusted record path reconstructs it verbatim.
        let mut wire = Vec::new();
        wire.put_u16(12);
        wire.put_slice(b"hmac(sha256)");
        wire.put_u32(4);
        wire.put_slice(&[1, 2, 3, 4]);
        wire.put_u32(8);

        let descriptor = AlgorithmDescriptor::decode(&wire).unwrap();

        assert_eq!(descriptor.algorithm(), Algorithm::HmacSha256);
        assert_eq!(descriptor.key(), vec![1, 2, 3, 4]);
        assert_eq!(descriptor.truncation_len_bits(), 8);
        assert!(!Algorithm::HmacSha256.truncation_valid(8));
    }

    #[test]
    fn encode_rejects_oversized_key() {
        // The validating constructors do not bound key length; the codec
        // does.
        let key = vec![0u8; AlgorithmDescriptor::MAX_KEY_LEN + 1];
        let descriptor =
            AlgorithmDescriptor::with_truncation(Algorithm::HmacSha512, &key, 512).unwrap();

        let mut wire = Vec::new();
        let err = descriptor.encode(&mut wire).unwrap_err();

        assert_eq!(
            err,
            RecordError::KeyTooLarge { len: key.len(), max: AlgorithmDescriptor::MAX_KEY_LEN }
        );
    }
}
