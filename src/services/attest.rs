use crate::domain::models::{AttestationReport, EvidenceEntry};
use crate::error::AttestError;
use crate::services::digest::hash_file;
use crate::services::scan::collect_evidence_files;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Hash every evidence file under `root` into a report stamped with the
/// current time.
pub fn attest(root: &Path) -> Result<AttestationReport, AttestError> {
    attest_at(root, unix_now())
}

pub fn attest_at(root: &Path, timestamp: u64) -> Result<AttestationReport, AttestError> {
    let files = collect_evidence_files(root)?;
    let entries: Vec<EvidenceEntry> = files.iter().map(|f| evidence_entry(f)).collect();

    let failed = entries.iter().filter(|e| e.is_failed()).count();
    info!(
        root = %root.display(),
        files = entries.len(),
        failed,
        "attestation complete"
    );
    Ok(AttestationReport::new(timestamp, entries))
}

/// Fingerprint one file. Never fails: errors become the entry's `error`.
pub fn evidence_entry(path: &Path) -> EvidenceEntry {
    let file = path.display().to_string();
    if path.to_str().is_none() {
        warn!(file = %file, "file name is not valid UTF-8; reported name is lossy");
    }
    match digest_and_size(path) {
        Ok((sha3_512, bytes)) => EvidenceEntry::Hashed {
            file,
            sha3_512,
            bytes,
        },
        Err(e) => {
            warn!(file = %file, error = %e, "evidence file could not be hashed");
            EvidenceEntry::Failed {
                file,
                error: e.to_string(),
            }
        }
    }
}

fn digest_and_size(path: &Path) -> std::io::Result<(String, u64)> {
    let (digest, streamed) = hash_file(path)?;
    let bytes = std::fs::metadata(path)?.len();
    if bytes != streamed {
        warn!(
            file = %path.display(),
            streamed,
            bytes,
            "file size changed while hashing"
        );
    }
    Ok((digest, bytes))
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
