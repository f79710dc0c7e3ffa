//! Command handler layer.
//!
//! ## Files
//! - `verify.rs` — `--verify <dir>`: attest a directory and print the report.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate hashing and report assembly to `services/*`.
//! - Keep the report schema stable.

pub mod verify;

pub use verify::handle_verify;
