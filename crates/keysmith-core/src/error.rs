use std::fmt;

use thiserror::Error;

pub type KeysmithResult<T> = Result<T, KeysmithError>;

/// Every pipeline stage failure reaches the caller; nothing is retried
/// (regeneration yields different key material) and partial results are
/// never committed.
#[derive(Debug, Error)]
pub enum KeysmithError {
    #[error("key needs at least one identity")]
    MissingIdentity,

    #[error("key generation failed: {0}")]
    Generation(String),

    #[error("locking private key failed: {0}")]
    Lock(String),

    #[error("wrong passphrase for locked private key")]
    InvalidPassphrase,

    #[error("{stage} encoding failed: {detail}")]
    Encoding { stage: EncodeStage, detail: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The output projection that failed to serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeStage {
    KeyId,
    Fingerprint,
    PrivateKeyArmor,
    PrivateKeyBinary,
    PublicKeyArmor,
    PublicKeyBinary,
}

impl fmt::Display for EncodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EncodeStage::KeyId => "key id",
            EncodeStage::Fingerprint => "fingerprint",
            EncodeStage::PrivateKeyArmor => "armored private key",
            EncodeStage::PrivateKeyBinary => "binary private key",
            EncodeStage::PublicKeyArmor => "armored public key",
            EncodeStage::PublicKeyBinary => "binary public key",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_names_the_stage() {
        let err = KeysmithError::Encoding {
            stage: EncodeStage::PublicKeyArmor,
            detail: "broken pipe".into(),
        };
        assert_eq!(
            err.to_string(),
            "armored public key encoding failed: broken pipe"
        );
    }

    #[test]
    fn test_invalid_passphrase_message_carries_no_secret() {
        let msg = KeysmithError::InvalidPassphrase.to_string();
        assert!(msg.contains("wrong passphrase"));
    }
}
