//! keysmith-core: shared vocabulary for the keysmith workspace
//!
//! Identity claims, the fixed crypto profile, the passphrase secret
//! type, the output bundle, and the error taxonomy shared by the key
//! pipeline (`keysmith-pgp`) and the resource controller
//! (`keysmith-provider`).

pub mod error;
pub mod profile;
pub mod secret;
pub mod types;

pub use error::{EncodeStage, KeysmithError, KeysmithResult};
pub use profile::CryptoProfile;
pub use secret::Passphrase;
pub use types::{validate_identities, Identity, KeyOutputBundle};
