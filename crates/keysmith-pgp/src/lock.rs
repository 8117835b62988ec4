//! Passphrase locking of private key material
//!
//! `lock` encrypts the secret packets with the OpenPGP string-to-key
//! transform under the profile cipher; the public half is never
//! encrypted. `unlock` is a verification-only inverse: it decrypts a
//! clone and leaves the stored key untouched.

use keysmith_core::profile::SymmetricCipher;
use keysmith_core::{CryptoProfile, KeysmithError, KeysmithResult, Passphrase};
use pgp::composed::{Deserializable, SignedSecretKey};
use pgp::types::{KeyDetails, Password, SecretParams};

use crate::generate::RawKeyPair;

/// A key pair whose secret packets are encrypted under a passphrase.
///
/// The only form of private key material that may be persisted.
#[derive(Clone)]
pub struct LockedKeyPair {
    pub(crate) key: SignedSecretKey,
}

pub(crate) fn secret_packets_encrypted(key: &SignedSecretKey) -> bool {
    matches!(key.primary_key.secret_params(), SecretParams::Encrypted(_))
}

impl RawKeyPair {
    /// Lock the private key under `passphrase`.
    ///
    /// Consumes the raw pair: whether locking succeeds or fails, the
    /// unlocked copy is dropped here and its secret material zeroized.
    pub fn lock(
        mut self,
        passphrase: &Passphrase,
        profile: &CryptoProfile,
    ) -> KeysmithResult<LockedKeyPair> {
        if profile.symmetric_cipher != SymmetricCipher::Aes256 {
            return Err(KeysmithError::Lock(format!(
                "unsupported key encryption cipher {:?}: the string-to-key transform uses AES-256",
                profile.symmetric_cipher
            )));
        }

        let mut rng = rand::thread_rng();
        self.key
            .primary_key
            .set_password(&mut rng, &Password::from(passphrase.expose()))
            .map_err(|e| KeysmithError::Lock(e.to_string()))?;

        let locked = LockedKeyPair { key: self.key };
        tracing::debug!(key_id = %locked.key_id(), "locked private key");
        Ok(locked)
    }
}

impl LockedKeyPair {
    /// Key ID in hex format.
    pub fn key_id(&self) -> String {
        hex::encode(self.key.key_id())
    }

    /// Full fingerprint in hex format.
    pub fn fingerprint(&self) -> String {
        hex::encode(self.key.fingerprint().as_bytes())
    }

    /// Whether the secret packets are passphrase-encrypted.
    pub fn is_locked(&self) -> bool {
        secret_packets_encrypted(&self.key)
    }

    /// The underlying OpenPGP key, for packet-level inspection.
    pub fn key(&self) -> &SignedSecretKey {
        &self.key
    }

    /// Trial unlock: decrypt a clone of the secret packets with
    /// `passphrase`, leaving `self` locked.
    ///
    /// A well-formed locked key has exactly one failure mode here, so
    /// any decryption error reports as `InvalidPassphrase`.
    pub fn unlock(&self, passphrase: &Passphrase) -> KeysmithResult<RawKeyPair> {
        let mut key = self.key.clone();
        key.primary_key
            .remove_password(&Password::from(passphrase.expose()))
            .map_err(|_| KeysmithError::InvalidPassphrase)?;
        Ok(RawKeyPair { key })
    }

    /// Re-parse a locked key pair from its armored private-key
    /// encoding, e.g. out of persisted resource state.
    pub fn from_armored(armored: &str) -> KeysmithResult<Self> {
        let (key, _headers) = SignedSecretKey::from_string(armored)
            .map_err(|e| KeysmithError::Lock(format!("parsing armored private key: {e}")))?;
        Ok(Self { key })
    }
}

impl std::fmt::Debug for LockedKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockedKeyPair")
            .field("key_id", &self.key_id())
            .field("locked", &self.is_locked())
            .finish()
    }
}
