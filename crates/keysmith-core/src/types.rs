use serde::{Deserialize, Serialize};

use crate::error::{KeysmithError, KeysmithResult};

/// A (name, email) claim bound into a key as a user ID.
///
/// Immutable once part of a generated key: the controller plans any
/// identity change as full key replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Render the OpenPGP user-ID binding, `Name <email>`.
    pub fn user_id(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// The derived projections of one locked key pair.
///
/// Immutable once produced; regenerated only when a new key pair is.
/// Field names match the resource schema, so this serializes straight
/// into the engine-observed state record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyOutputBundle {
    /// Key ID in hex format.
    pub id: String,
    /// Full fingerprint in hex format.
    pub fingerprint: String,
    /// Private key in armored format, locked under the passphrase.
    pub private_key: String,
    /// Private key packet serialization, hex-encoded.
    pub private_key_hex: String,
    /// Public key in armored format.
    pub public_key: String,
    /// Public key packet serialization, hex-encoded.
    pub public_key_hex: String,
}

/// v4 keys need at least one identity bound as a user ID.
///
/// Name and email are otherwise opaque; no format checking happens
/// here.
pub fn validate_identities(identities: &[Identity]) -> KeysmithResult<()> {
    if identities.is_empty() {
        return Err(KeysmithError::MissingIdentity);
    }
    Ok(())
}
