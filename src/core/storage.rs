//! Memory-Mapped File Storage untuk buffer hasil serialize
//!
//! Buffer ditulis langsung ke mapping file, lalu di-flush ke disk.
//! Core encoder tidak pernah melakukan I/O; modul ini adalah satu-satunya
//! tempat file disentuh.

use memmap2::MmapOptions;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{debug, info};

use super::error::Result;

/// Simpan buffer ke `path` (file dibuat atau di-truncate).
///
/// Buffer kosong menghasilkan file kosong tanpa mapping, karena mmap
/// dengan panjang nol ditolak oleh OS.
pub fn save<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.set_len(bytes.len() as u64)?;

    if bytes.is_empty() {
        debug!(path = %path.display(), "empty buffer, skipping mmap");
        return Ok(());
    }

    // SAFETY: File baru saja dibuka read/write dan di-resize ke panjang buffer;
    // tidak ada mapping lain ke file ini selama fungsi berjalan.
    let mut mmap = unsafe { MmapOptions::new().len(bytes.len()).map_mut(&file)? };
    mmap.copy_from_slice(bytes);
    mmap.flush()?;

    info!(path = %path.display(), bytes = bytes.len(), "buffer saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("treepack_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_save_roundtrip_bytes() {
        let path = temp_path("basic.bin");
        let data = b"\x05\x00\x00\x00Hello";

        save(&path, data).unwrap();
        assert_eq!(fs::read(&path).unwrap(), data);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_truncates_previous_content() {
        let path = temp_path("truncate.bin");

        save(&path, b"a much longer previous payload").unwrap();
        save(&path, b"short").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"short");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_empty_buffer() {
        let path = temp_path("empty.bin");

        save(&path, &[]).unwrap();
        assert!(fs::read(&path).unwrap().is_empty());

        fs::remove_file(&path).ok();
    }
}
