//! keysmith-pgp: OpenPGP key pair generation, locking, and encoding
//!
//! Pipeline:
//! ```text
//! identities + profile → generate → RawKeyPair
//!                                      │ lock(passphrase)   (consumes)
//!                                      ▼
//!                                LockedKeyPair → encode → KeyOutputBundle
//! ```
//!
//! The raw (unlocked) pair exists only between generation and locking.
//! `lock` takes it by value, so no unlocked copy outlives the call;
//! the primitive layer zeroizes secret packet material on drop on both
//! the success and the error path. Only locked material leaves this
//! crate.
//!
//! Every stage is a pure, synchronous function over its inputs; key
//! generation is the one non-deterministic step (system randomness).

pub mod encode;
pub mod generate;
pub mod lock;

pub use encode::encode;
pub use generate::{generate, RawKeyPair};
pub use lock::LockedKeyPair;
