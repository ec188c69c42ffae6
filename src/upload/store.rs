//! Upload directory persistence

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Write upload bytes under the given directory.
///
/// The target is `<dir>/<filename>`; an existing file of the same name is
/// overwritten in place. The directory is created if missing.
pub async fn save_upload(dir: &Path, filename: &str, data: &[u8]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(filename);
    tokio::fs::write(&path, data).await?;

    Ok(path)
}
