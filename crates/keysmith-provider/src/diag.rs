//! Field-scoped diagnostics surfaced to the hosting engine

use std::fmt;

use keysmith_core::KeysmithError;

/// A user-visible failure report, optionally scoped to a configuration
/// attribute. The detail always names the pipeline stage that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub attribute: Option<String>,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            attribute: None,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn attribute_error(
        attribute: impl Into<String>,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            attribute: Some(attribute.into()),
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl From<KeysmithError> for Diagnostic {
    fn from(err: KeysmithError) -> Self {
        let detail = err.to_string();
        match err {
            KeysmithError::MissingIdentity => Diagnostic::attribute_error(
                "identities",
                "GPG v4 keys need at least one identity",
                detail,
            ),
            KeysmithError::Generation(_) => {
                Diagnostic::error("GPG key generation failed", detail)
            }
            KeysmithError::Lock(_) | KeysmithError::InvalidPassphrase => {
                Diagnostic::error("GPG key locking failed", detail)
            }
            KeysmithError::Encoding { .. } => {
                Diagnostic::error("GPG key encoding failed", detail)
            }
            KeysmithError::Other(_) => Diagnostic::error("GPG key operation failed", detail),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(attribute) => write!(f, "{} ({}): {}", self.summary, attribute, self.detail),
            None => write!(f, "{}: {}", self.summary, self.detail),
        }
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;
    use keysmith_core::EncodeStage;

    #[test]
    fn test_missing_identity_is_scoped_to_the_attribute() {
        let diag = Diagnostic::from(KeysmithError::MissingIdentity);
        assert_eq!(diag.attribute.as_deref(), Some("identities"));
        assert!(diag.summary.contains("at least one identity"));
    }

    #[test]
    fn test_stage_failures_name_the_stage() {
        let diag = Diagnostic::from(KeysmithError::Encoding {
            stage: EncodeStage::PrivateKeyBinary,
            detail: "short write".into(),
        });
        assert_eq!(diag.attribute, None);
        assert!(diag.detail.contains("binary private key"));
    }

    #[test]
    fn test_display_includes_attribute_scope() {
        let diag = Diagnostic::attribute_error("identities", "invalid", "empty list");
        assert_eq!(diag.to_string(), "invalid (identities): empty list");
    }
}
