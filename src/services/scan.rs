use crate::error::AttestError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Create `root` if needed and return every evidence file beneath it, sorted
/// by the bytes of the full path.
///
/// Regular files and symlinks to regular files count as evidence. Symlinked
/// directories are not descended into. Listing errors below the root are
/// logged and the subtree is skipped; only the root itself is fatal.
pub fn collect_evidence_files(root: &Path) -> Result<Vec<PathBuf>, AttestError> {
    std::fs::create_dir_all(root).map_err(|source| AttestError::CreateRoot {
        path: root.to_path_buf(),
        source,
    })?;
    let entries = std::fs::read_dir(root).map_err(|source| AttestError::ReadRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    walk(entries, &mut files);
    files.sort_by(|a, b| {
        a.as_os_str()
            .as_encoded_bytes()
            .cmp(b.as_os_str().as_encoded_bytes())
    });
    debug!(root = %root.display(), files = files.len(), "evidence walk complete");
    Ok(files)
}

fn walk(entries: std::fs::ReadDir, out: &mut Vec<PathBuf>) {
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        let ty = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot determine file type");
                continue;
            }
        };
        if ty.is_dir() {
            match std::fs::read_dir(&path) {
                Ok(sub) => walk(sub, out),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable directory"),
            }
        } else if ty.is_file() || is_symlink_to_file(&path, ty) {
            out.push(path);
        }
    }
}

fn is_symlink_to_file(path: &Path, ty: std::fs::FileType) -> bool {
    ty.is_symlink()
        && std::fs::metadata(path)
            .map(|m| m.is_file())
            .unwrap_or(false)
}
