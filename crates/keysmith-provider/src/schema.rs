//! Resource schema descriptions for the hosting engine
//!
//! Two registered variants share one controller: `gpg_key` (current)
//! and `gpg_key_pair` (deprecated alias kept for existing
//! configurations). They differ only in type name and metadata.

use serde::Serialize;

/// How the engine treats a single attribute during planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub computed: bool,
    pub sensitive: bool,
    /// A configuration change to this attribute forces full key
    /// replacement (destroy-then-create).
    pub requires_replace: bool,
    /// Computed value is carried over from prior state while the plan
    /// is unknown; it is never speculatively recomputed.
    pub preserve_on_unknown: bool,
}

impl AttributeSchema {
    const fn input(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
            computed: false,
            sensitive: false,
            requires_replace: false,
            preserve_on_unknown: false,
        }
    }

    const fn computed(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
            computed: true,
            sensitive: false,
            requires_replace: false,
            preserve_on_unknown: true,
        }
    }

    const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    const fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }
}

/// Description of one resource type as registered with the engine.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceSchema {
    pub type_name: &'static str,
    pub description: &'static str,
    pub deprecation_message: Option<&'static str>,
    pub attributes: Vec<AttributeSchema>,
}

impl ResourceSchema {
    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// The GPG key resource schema.
///
/// The deprecated variant is the same resource under its legacy type
/// name; only the metadata differs.
pub fn key_resource_schema(deprecated: bool) -> ResourceSchema {
    ResourceSchema {
        type_name: if deprecated { "gpg_key_pair" } else { "gpg_key" },
        description: "A resource for generating ECC (Curve25519) GPG keys.",
        deprecation_message: deprecated
            .then_some("Use the gpg_key resource instead; gpg_key_pair will be removed."),
        attributes: vec![
            AttributeSchema::computed("id", "ID of the key in hex format."),
            AttributeSchema::input(
                "identities",
                "List of identities for the GPG key, each a (name, email) pair. \
                 Only one identity is meaningfully supported: the first becomes \
                 the primary user ID, the rest are bound as additional user IDs.",
            )
            .requires_replace(),
            AttributeSchema::input("passphrase", "Passphrase for locking the key.").sensitive(),
            AttributeSchema::computed("fingerprint", "Fingerprint of the key."),
            AttributeSchema::computed("private_key", "Private key in armored format.").sensitive(),
            AttributeSchema::computed("private_key_hex", "Private key in hex format.").sensitive(),
            AttributeSchema::computed("public_key", "Public key in armored format."),
            AttributeSchema::computed("public_key_hex", "Public key in hex format."),
        ],
    }
}

/// Every resource type this provider registers, current variant first.
pub fn resource_schemas() -> Vec<ResourceSchema> {
    vec![key_resource_schema(false), key_resource_schema(true)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_changes_force_replacement() {
        let schema = key_resource_schema(false);
        let identities = schema.attribute("identities").unwrap();
        assert!(identities.required);
        assert!(identities.requires_replace);

        let passphrase = schema.attribute("passphrase").unwrap();
        assert!(passphrase.required);
        assert!(
            !passphrase.requires_replace,
            "a passphrase change must plan as an in-place update"
        );
    }

    #[test]
    fn test_sensitive_attributes() {
        let schema = key_resource_schema(false);
        for name in ["passphrase", "private_key", "private_key_hex"] {
            assert!(schema.attribute(name).unwrap().sensitive, "{name} is sensitive");
        }
        for name in ["id", "fingerprint", "public_key", "public_key_hex"] {
            assert!(!schema.attribute(name).unwrap().sensitive, "{name} is not sensitive");
        }
    }

    #[test]
    fn test_computed_attributes_preserve_prior_values() {
        let schema = key_resource_schema(false);
        for attribute in schema.attributes.iter().filter(|a| a.computed) {
            assert!(
                attribute.preserve_on_unknown,
                "{} must not be speculatively recomputed during planning",
                attribute.name
            );
        }
    }

    #[test]
    fn test_deprecated_variant_differs_only_in_metadata() {
        let current = key_resource_schema(false);
        let deprecated = key_resource_schema(true);

        assert_eq!(current.type_name, "gpg_key");
        assert_eq!(deprecated.type_name, "gpg_key_pair");
        assert!(current.deprecation_message.is_none());
        assert!(deprecated.deprecation_message.is_some());
        assert_eq!(current.attributes, deprecated.attributes);
    }

    #[test]
    fn test_registry_lists_current_variant_first() {
        let schemas = resource_schemas();
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas[0].type_name, "gpg_key");
        assert_eq!(schemas[1].type_name, "gpg_key_pair");
    }
}
