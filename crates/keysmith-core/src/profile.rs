//! Fixed key-generation profile
//!
//! Process-wide constant, not user-configurable: every resource
//! instance generates under the same profile. It is still threaded as
//! an explicit parameter through the pipeline so tests can substitute
//! alternates without touching shared state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAlgorithm {
    EdDSA,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Curve {
    Curve25519,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashFunction {
    Sha256,
    Sha512,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymmetricCipher {
    Aes128,
    Aes256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compression {
    Uncompressed,
    Zlib,
}

/// Generator strength tier. Only `High` is accepted by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityTier {
    Standard,
    High,
}

/// Algorithm selection for key generation and locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoProfile {
    pub key_algorithm: KeyAlgorithm,
    pub curve: Curve,
    /// Preferred hash for self-signatures.
    pub hash: HashFunction,
    /// Cipher for the string-to-key locking transform.
    pub symmetric_cipher: SymmetricCipher,
    pub compression: Compression,
    /// OpenPGP key packet version.
    pub key_version: u8,
    pub security: SecurityTier,
}

impl CryptoProfile {
    /// Profile conforming with modern algorithms available in
    /// GnuPG >= 2.1: EdDSA over Curve25519, SHA-512, AES-256, ZLIB,
    /// v4 packets.
    pub fn gnupg() -> Self {
        Self {
            key_algorithm: KeyAlgorithm::EdDSA,
            curve: Curve::Curve25519,
            hash: HashFunction::Sha512,
            symmetric_cipher: SymmetricCipher::Aes256,
            compression: Compression::Zlib,
            key_version: 4,
            security: SecurityTier::High,
        }
    }
}

impl Default for CryptoProfile {
    fn default() -> Self {
        Self::gnupg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_gnupg_21() {
        let profile = CryptoProfile::default();
        assert_eq!(profile.key_algorithm, KeyAlgorithm::EdDSA);
        assert_eq!(profile.curve, Curve::Curve25519);
        assert_eq!(profile.hash, HashFunction::Sha512);
        assert_eq!(profile.symmetric_cipher, SymmetricCipher::Aes256);
        assert_eq!(profile.compression, Compression::Zlib);
        assert_eq!(profile.key_version, 4);
        assert_eq!(profile.security, SecurityTier::High);
    }
}
