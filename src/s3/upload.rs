use std::path::Path;
use tokio::fs::File;
use tracing::debug;

use super::error::{Error, Result};
use super::store::ObjectStore;
use crate::obfuscate::{RootSegment, object_key};

/// Compute the obfuscated object key for `file_path` under `root`
///
/// When `file_path` is the root itself (a single file was given), the key
/// is built from its file name alone.
pub fn key_for(root: &Path, file_path: &Path, root_segment: RootSegment) -> Result<String> {
    let invalid = || Error::InvalidPath {
        path: file_path.to_path_buf(),
    };

    let relative = file_path.strip_prefix(root).map_err(|_| invalid())?;
    let relative = if relative.as_os_str().is_empty() {
        Path::new(file_path.file_name().ok_or_else(invalid)?)
    } else {
        relative
    };

    object_key(relative, root_segment).ok_or_else(invalid)
}

/// Upload one file to `store` under its obfuscated key
///
/// Returns the key the file was stored under.
pub async fn upload_file<S: ObjectStore>(
    store: &S,
    root: &Path,
    file_path: &Path,
    root_segment: RootSegment,
) -> Result<String> {
    let key = key_for(root, file_path, root_segment)?;

    let file = File::open(file_path)
        .await
        .map_err(|e| Error::file_access(file_path, e))?;
    let content_length = file
        .metadata()
        .await
        .map_err(|e| Error::file_access(file_path, e))?
        .len();

    store.put_object(&key, file, content_length).await?;

    debug!("Uploaded {} ({} bytes)", key, content_length);
    Ok(key)
}
