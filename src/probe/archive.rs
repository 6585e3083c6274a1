//! Scoped archive storage and extraction
//!
//! Downloaded bytes go to a named temporary file and are unpacked into a
//! temporary directory. Both are owned by [`UnpackedArchive`] or dropped on the
//! error path, so nothing outlives a probe. The format is chosen from the
//! leading magic bytes: gzip-compressed tar or zip.

use super::error::ProbeError;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};
use tracing::debug;
use zip::ZipArchive;

/// An archive extracted into temporary storage; deleted on drop
pub struct UnpackedArchive {
    _download: NamedTempFile,
    dir: TempDir,
}

impl UnpackedArchive {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];
const ZIP_MAGIC: &[&[u8]] = &[b"PK\x03\x04", b"PK\x05\x06"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    TarGz,
    Zip,
}

impl ArchiveFormat {
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(GZIP_MAGIC) {
            Some(Self::TarGz)
        } else if ZIP_MAGIC.iter().any(|magic| bytes.starts_with(magic)) {
            Some(Self::Zip)
        } else {
            None
        }
    }
}

/// Persists `bytes` and unpacks them as tar.gz or zip
pub fn unpack(bytes: &[u8]) -> Result<UnpackedArchive, ProbeError> {
    unpack_in(bytes, &std::env::temp_dir())
}

/// Like [`unpack`], with all temporary storage created under `parent`
pub fn unpack_in(bytes: &[u8], parent: &Path) -> Result<UnpackedArchive, ProbeError> {
    let format = ArchiveFormat::sniff(bytes)
        .ok_or_else(|| ProbeError::Unpack("unrecognized archive format".to_string()))?;

    let mut download = NamedTempFile::new_in(parent)?;
    download.write_all(bytes)?;
    download.flush()?;

    let dir = TempDir::new_in(parent)?;
    let file = download.reopen()?;
    match format {
        ArchiveFormat::TarGz => unpack_tar_gz(file, dir.path())?,
        ArchiveFormat::Zip => unpack_zip(file, dir.path())?,
    }

    debug!(dir = %dir.path().display(), ?format, "Archive unpacked");
    Ok(UnpackedArchive {
        _download: download,
        dir,
    })
}

fn unpack_tar_gz(file: File, dest: &Path) -> Result<(), ProbeError> {
    tar::Archive::new(GzDecoder::new(file))
        .unpack(dest)
        .map_err(|e| ProbeError::Unpack(e.to_string()))
}

fn unpack_zip(file: File, dest: &Path) -> Result<(), ProbeError> {
    ZipArchive::new(file)
        .and_then(|mut archive| archive.extract(dest))
        .map_err(|e| ProbeError::Unpack(e.to_string()))
}
