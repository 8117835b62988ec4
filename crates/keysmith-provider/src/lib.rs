//! keysmith-provider: the GPG key resource exposed to a declarative
//! infrastructure engine
//!
//! The hosting engine owns state persistence and operation sequencing;
//! this crate supplies the schema description, the plan decision, and
//! the lifecycle transitions (validate / create / read / update /
//! destroy). One controller backs both registered schema variants,
//! `gpg_key` and the deprecated `gpg_key_pair` alias, which differ
//! only in metadata, never in behavior.

pub mod diag;
pub mod lifecycle;
pub mod schema;

pub use diag::Diagnostic;
pub use lifecycle::{KeyConfig, KeyController, KeyState, PassphraseChangePolicy, PlanAction};
pub use schema::{key_resource_schema, resource_schemas, AttributeSchema, ResourceSchema};
