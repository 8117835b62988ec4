//! Passphrase secret type

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

/// A key-locking passphrase.
///
/// Held as secret memory, zeroized on drop, redacted in `Debug`
/// output. Serialization exists only because the hosting engine
/// persists the resource state; the `passphrase` attribute is marked
/// sensitive in the schema.
pub struct Passphrase(SecretString);

impl Passphrase {
    pub fn new(value: impl Into<String>) -> Self {
        // wipe the intermediate copy once it has moved into secret memory
        let raw = Zeroizing::new(value.into());
        Self(SecretString::from(raw.as_str()))
    }

    /// Borrow the raw passphrase for locking/unlocking. Callers must
    /// not copy it into longer-lived storage.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Compare two passphrases without either reaching log output.
    pub fn matches(&self, other: &Passphrase) -> bool {
        self.expose() == other.expose()
    }
}

impl Clone for Passphrase {
    fn clone(&self) -> Self {
        Passphrase::new(self.expose())
    }
}

impl From<&str> for Passphrase {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Passphrase {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Passphrase").field(&"[REDACTED]").finish()
    }
}

impl Serialize for Passphrase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.expose())
    }
}

impl<'de> Deserialize<'de> for Passphrase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Passphrase::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_is_redacted() {
        let passphrase = Passphrase::from("top secret");
        let rendered = format!("{passphrase:?}");
        assert!(!rendered.contains("top secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_matches() {
        let a = Passphrase::from("top secret");
        let b = Passphrase::from("top secret");
        let c = Passphrase::from("wrong");
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_serde_round_trip() {
        let passphrase = Passphrase::from("top secret");
        let json = serde_json::to_string(&passphrase).unwrap();
        let back: Passphrase = serde_json::from_str(&json).unwrap();
        assert!(passphrase.matches(&back));
    }
}
