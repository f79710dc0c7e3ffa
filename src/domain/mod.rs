//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — evidence entries and the attestation report.
//! - `constants.rs` — stable constants (chunk size, default dir, sentinel note).
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! These structs define the JSON report written to stdout. Keep schema-impacting
//! changes synchronized with `docs/contracts/attestation.schema.json`.

pub mod constants;
pub mod models;
