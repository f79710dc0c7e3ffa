use std::path::PathBuf;

/// Faults that abort the whole run. Per-file failures never surface here;
/// they are recorded inline in the report.
#[derive(thiserror::Error, Debug)]
pub enum AttestError {
    #[error("cannot create evidence directory {}: {source}", path.display())]
    CreateRoot {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read evidence directory {}: {source}", path.display())]
    ReadRoot {
        path: PathBuf,
        source: std::io::Error,
    },
}
