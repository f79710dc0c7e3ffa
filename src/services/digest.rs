use crate::domain::constants::HASH_CHUNK_SIZE;
use sha3::{Digest, Sha3_512};
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Stream `reader` through SHA3-512 using a `chunk_size` buffer.
///
/// Returns the lowercase hex digest and the number of bytes consumed.
pub fn hash_reader<R: Read>(mut reader: R, chunk_size: usize) -> std::io::Result<(String, u64)> {
    let mut hasher = Sha3_512::new();
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        total += n as u64;
    }
    Ok((hex::encode(hasher.finalize()), total))
}

/// Digest a file in 1 MiB chunks. The handle is closed when this returns.
pub fn hash_file(path: &Path) -> std::io::Result<(String, u64)> {
    let file = std::fs::File::open(path)?;
    hash_reader(file, HASH_CHUNK_SIZE)
}

pub fn hash_bytes(data: &[u8]) -> String {
    hex::encode(Sha3_512::digest(data))
}
