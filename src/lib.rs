//! Evidence attestation: fingerprint every file under a directory with
//! SHA3-512 and describe the result as a JSON report.
//!
//! ## Layers
//! - `cli` — flag definitions.
//! - `commands` — thin handlers wiring flags to services and output.
//! - `domain` — report types and constants (data only).
//! - `services` — hashing, directory walk, report assembly, output.
//! - `error` — faults that abort a run.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod services;

pub use domain::models::{AttestationReport, EvidenceEntry, ReportEntry};
pub use error::AttestError;
pub use services::attest::{attest, attest_at, evidence_entry};
pub use services::digest::{hash_bytes, hash_file, hash_reader};
