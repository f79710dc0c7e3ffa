use crate::domain::constants::{NO_EVIDENCE_NOTE, STATUS_OK};
use serde::{Deserialize, Serialize};

/// Outcome of fingerprinting one evidence file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvidenceEntry {
    Hashed {
        file: String,
        sha3_512: String,
        bytes: u64,
    },
    Failed {
        file: String,
        error: String,
    },
}

impl EvidenceEntry {
    pub fn file(&self) -> &str {
        match self {
            EvidenceEntry::Hashed { file, .. } | EvidenceEntry::Failed { file, .. } => file,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, EvidenceEntry::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Evidence(EvidenceEntry),
    Note { note: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationReport {
    #[serde(rename = "ts")]
    pub timestamp: u64,
    pub status: String,
    /// Number of real evidence entries; the empty-directory note is not counted.
    pub count: u64,
    pub entries: Vec<ReportEntry>,
}

impl AttestationReport {
    pub fn new(timestamp: u64, evidence: Vec<EvidenceEntry>) -> Self {
        let count = evidence.len() as u64;
        let entries = if evidence.is_empty() {
            vec![ReportEntry::Note {
                note: NO_EVIDENCE_NOTE.to_string(),
            }]
        } else {
            evidence.into_iter().map(ReportEntry::Evidence).collect()
        };
        Self {
            timestamp,
            status: STATUS_OK.to_string(),
            count,
            entries,
        }
    }

    pub fn evidence(&self) -> impl Iterator<Item = &EvidenceEntry> {
        self.entries.iter().filter_map(|e| match e {
            ReportEntry::Evidence(ev) => Some(ev),
            ReportEntry::Note { .. } => None,
        })
    }
}
