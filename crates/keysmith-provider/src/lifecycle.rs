//! Key resource lifecycle: plan decisions and state transitions
//!
//! The hosting engine serializes operations per resource instance;
//! every operation here is synchronous and runs to completion. An
//! identity change always plans as full replacement: the engine
//! sequences destroy-then-create, and `create` always generates from
//! scratch, never mutating existing key material. A passphrase-only
//! change is an in-place update governed by `PassphraseChangePolicy`.

use keysmith_core::{CryptoProfile, Identity, KeyOutputBundle, Passphrase};
use keysmith_pgp::{encode, generate, LockedKeyPair};
use serde::{Deserialize, Serialize};

use crate::diag::Diagnostic;
use crate::schema::{key_resource_schema, ResourceSchema};

/// Desired configuration, as written by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyConfig {
    pub identities: Vec<Identity>,
    pub passphrase: Passphrase,
}

/// The engine-observed state record: the inputs plus every generated
/// output. Owned exclusively by the controller; the key pipeline only
/// ever borrows inputs and returns new values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyState {
    pub identities: Vec<Identity>,
    pub passphrase: Passphrase,
    #[serde(flatten)]
    pub bundle: KeyOutputBundle,
}

/// What the next apply must do to converge on the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    /// No prior state: generate a new key.
    Create,
    /// The identity set changed: discard the old key pair and generate
    /// a brand-new one (destroy-then-create, sequenced by the engine).
    Replace,
    /// Only the passphrase changed: update state in place.
    UpdateInPlace,
    /// Configuration matches state.
    NoOp,
}

/// What happens to previously generated key material when only the
/// passphrase changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassphraseChangePolicy {
    /// Accept the new passphrase into state as-is; the stored bundle
    /// stays locked under the passphrase it was generated with. This
    /// matches the resource's long-standing observed behavior.
    #[default]
    NoOp,
    /// Unlock the stored key with the prior passphrase and re-lock the
    /// same material under the new one; id and fingerprint are
    /// unchanged.
    Relock,
}

/// The state machine exposed to the declarative engine.
///
/// States are `Absent` (no `KeyState`) and `Present` (a `KeyState`
/// exists); `create` and `destroy` are the only transitions between
/// them.
pub struct KeyController {
    profile: CryptoProfile,
    passphrase_policy: PassphraseChangePolicy,
    deprecated: bool,
}

impl KeyController {
    pub fn new() -> Self {
        Self::with_profile(CryptoProfile::default())
    }

    /// A controller generating under an explicit profile. Production
    /// use sticks to the default; tests substitute alternates here.
    pub fn with_profile(profile: CryptoProfile) -> Self {
        Self {
            profile,
            passphrase_policy: PassphraseChangePolicy::default(),
            deprecated: false,
        }
    }

    /// The controller registered under the legacy `gpg_key_pair` type
    /// name. Only schema metadata differs.
    pub fn deprecated() -> Self {
        Self {
            deprecated: true,
            ..Self::new()
        }
    }

    pub fn with_passphrase_policy(mut self, policy: PassphraseChangePolicy) -> Self {
        self.passphrase_policy = policy;
        self
    }

    pub fn schema(&self) -> ResourceSchema {
        key_resource_schema(self.deprecated)
    }

    /// Reject malformed configuration before any generation attempt.
    pub fn validate(&self, config: &KeyConfig) -> Result<(), Diagnostic> {
        keysmith_core::validate_identities(&config.identities)?;
        Ok(())
    }

    /// Decide what the next apply must do. Computed attributes are
    /// never derived here; planning only compares inputs.
    pub fn plan(&self, prior: Option<&KeyState>, config: &KeyConfig) -> PlanAction {
        let Some(state) = prior else {
            return PlanAction::Create;
        };
        if state.identities != config.identities {
            return PlanAction::Replace;
        }
        if !state.passphrase.matches(&config.passphrase) {
            return PlanAction::UpdateInPlace;
        }
        PlanAction::NoOp
    }

    /// `Absent → Present`: run the full pipeline. Any stage failure
    /// aborts the transition with a diagnostic naming the stage, and no
    /// state is committed.
    pub fn create(&self, config: &KeyConfig) -> Result<KeyState, Diagnostic> {
        self.validate(config)?;

        let raw = generate(&config.identities, &self.profile)?;
        let locked = raw.lock(&config.passphrase, &self.profile)?;
        let bundle = encode(&locked)?;

        tracing::info!(
            key_id = %bundle.id,
            fingerprint = %bundle.fingerprint,
            "created gpg key"
        );
        Ok(KeyState {
            identities: config.identities.clone(),
            passphrase: config.passphrase.clone(),
            bundle,
        })
    }

    /// State refresh with no configuration change. Previously generated
    /// key material is authoritative: nothing is re-derived or
    /// re-verified against the passphrase.
    pub fn read(&self, state: KeyState) -> KeyState {
        state
    }

    /// In-place update. Identity changes never arrive here (they plan
    /// as `Replace`), so the only input that can differ is the
    /// passphrase, handled per `PassphraseChangePolicy`.
    pub fn update(&self, prior: KeyState, config: &KeyConfig) -> Result<KeyState, Diagnostic> {
        match self.passphrase_policy {
            PassphraseChangePolicy::NoOp => {
                tracing::debug!(
                    key_id = %prior.bundle.id,
                    "accepted new passphrase into state without re-locking"
                );
                Ok(KeyState {
                    identities: config.identities.clone(),
                    passphrase: config.passphrase.clone(),
                    bundle: prior.bundle,
                })
            }
            PassphraseChangePolicy::Relock => {
                if prior.passphrase.matches(&config.passphrase) {
                    return Ok(KeyState {
                        identities: config.identities.clone(),
                        passphrase: config.passphrase.clone(),
                        bundle: prior.bundle,
                    });
                }
                let locked = LockedKeyPair::from_armored(&prior.bundle.private_key)?;
                let raw = locked.unlock(&prior.passphrase)?;
                let relocked = raw.lock(&config.passphrase, &self.profile)?;
                let bundle = encode(&relocked)?;

                tracing::info!(
                    key_id = %bundle.id,
                    "re-locked private key under new passphrase"
                );
                Ok(KeyState {
                    identities: config.identities.clone(),
                    passphrase: config.passphrase.clone(),
                    bundle,
                })
            }
        }
    }

    /// `Present → Absent`: forgetting state is the entire destroy.
    /// No revocation, no key-server interaction.
    pub fn destroy(&self, state: KeyState) {
        tracing::debug!(key_id = %state.bundle.id, "destroyed gpg key resource state");
        drop(state);
    }
}

impl Default for KeyController {
    fn default() -> Self {
        Self::new()
    }
}
