//! Service layer containing the attestation logic and side-effect helpers.
//!
//! ## Service map
//! - `digest.rs` — streaming SHA3-512 over files/readers.
//! - `scan.rs` — evidence directory walk and deterministic ordering.
//! - `attest.rs` — per-file entries and report assembly.
//! - `output.rs` — JSON output helpers.
//!
//! ## Conventions
//! - Per-file failures are data, not errors.
//! - Only the evidence root can abort a run.

pub mod attest;
pub mod digest;
pub mod output;
pub mod scan;
