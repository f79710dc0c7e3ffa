pub const DEFAULT_EVIDENCE_DIR: &str = "evidence/";

/// Read buffer for streaming digests (1 MiB).
pub const HASH_CHUNK_SIZE: usize = 1024 * 1024;

pub const STATUS_OK: &str = "ok";

pub const NO_EVIDENCE_NOTE: &str = "no evidence files present";
