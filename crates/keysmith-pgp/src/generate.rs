//! Key generation under a fixed crypto profile

use keysmith_core::profile::{
    Compression, Curve, HashFunction, KeyAlgorithm, SecurityTier, SymmetricCipher,
};
use keysmith_core::{validate_identities, CryptoProfile, Identity, KeysmithError, KeysmithResult};
use pgp::composed::{KeyType, SecretKeyParamsBuilder, SignedSecretKey};
use pgp::crypto::hash::HashAlgorithm;
use pgp::crypto::sym::SymmetricKeyAlgorithm;
use pgp::types::{CompressionAlgorithm, KeyDetails, Password};
use smallvec::smallvec;

/// A freshly generated, unlocked key pair.
///
/// Exists only between generation and locking: `lock` consumes it, and
/// the secret packet material is zeroized when the value drops.
pub struct RawKeyPair {
    pub(crate) key: SignedSecretKey,
}

impl RawKeyPair {
    /// Key ID in hex format.
    pub fn key_id(&self) -> String {
        hex::encode(self.key.key_id())
    }

    /// Full fingerprint in hex format.
    pub fn fingerprint(&self) -> String {
        hex::encode(self.key.fingerprint().as_bytes())
    }

    /// Whether the secret packets are passphrase-encrypted. Always
    /// false for a raw pair; the accessor exists so callers can assert
    /// the post-condition of an unlock trial.
    pub fn is_locked(&self) -> bool {
        crate::lock::secret_packets_encrypted(&self.key)
    }

    /// The underlying OpenPGP key, for packet-level inspection.
    pub fn key(&self) -> &SignedSecretKey {
        &self.key
    }
}

impl std::fmt::Debug for RawKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawKeyPair")
            .field("key_id", &self.key_id())
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Generate a new key pair carrying every identity as a user-ID
/// binding.
///
/// The first identity becomes the primary user ID; any remaining
/// identities are bound as additional user IDs on the same key; the
/// profile meaningfully supports a single primary and there is no
/// per-identity key material. The primary key is signing- and
/// certification-capable under the profile's algorithm family.
///
/// Non-deterministic: every call consumes system randomness and yields
/// distinct key material, even for identical identities. A failure
/// never returns partial key material.
pub fn generate(identities: &[Identity], profile: &CryptoProfile) -> KeysmithResult<RawKeyPair> {
    validate_identities(identities)?;

    let mut builder = SecretKeyParamsBuilder::default();
    builder
        .key_type(key_type(profile)?)
        .can_certify(true)
        .can_sign(true)
        .primary_user_id(identities[0].user_id())
        .preferred_symmetric_algorithms(smallvec![cipher(profile.symmetric_cipher)])
        .preferred_hash_algorithms(smallvec![hash(profile.hash)])
        .preferred_compression_algorithms(smallvec![compression(profile.compression)]);
    if identities.len() > 1 {
        builder.user_ids(identities[1..].iter().map(Identity::user_id).collect());
    }

    let params = builder
        .build()
        .map_err(|e| KeysmithError::Generation(format!("key generation request: {e}")))?;

    let mut rng = rand::thread_rng();
    let secret = params
        .generate(&mut rng)
        .map_err(|e| KeysmithError::Generation(e.to_string()))?;
    let key = secret
        .sign(&mut rng, &Password::empty())
        .map_err(|e| KeysmithError::Generation(e.to_string()))?;

    let pair = RawKeyPair { key };
    tracing::debug!(key_id = %pair.key_id(), "generated key pair");
    Ok(pair)
}

/// Map the profile onto a generation request, rejecting combinations
/// the generator does not support instead of silently coercing them.
fn key_type(profile: &CryptoProfile) -> KeysmithResult<KeyType> {
    if profile.key_version != 4 {
        return Err(KeysmithError::Generation(format!(
            "unsupported key version {}: only v4 keys are generated",
            profile.key_version
        )));
    }
    if profile.security != SecurityTier::High {
        return Err(KeysmithError::Generation(
            "only the high security tier is supported".into(),
        ));
    }
    match (profile.key_algorithm, profile.curve) {
        (KeyAlgorithm::EdDSA, Curve::Curve25519) => Ok(KeyType::Ed25519Legacy),
    }
}

fn hash(hash: HashFunction) -> HashAlgorithm {
    match hash {
        HashFunction::Sha256 => HashAlgorithm::Sha256,
        HashFunction::Sha512 => HashAlgorithm::Sha512,
    }
}

fn cipher(cipher: SymmetricCipher) -> SymmetricKeyAlgorithm {
    match cipher {
        SymmetricCipher::Aes128 => SymmetricKeyAlgorithm::AES128,
        SymmetricCipher::Aes256 => SymmetricKeyAlgorithm::AES256,
    }
}

fn compression(compression: Compression) -> CompressionAlgorithm {
    match compression {
        Compression::Uncompressed => CompressionAlgorithm::Uncompressed,
        Compression::Zlib => CompressionAlgorithm::ZLIB,
    }
}
