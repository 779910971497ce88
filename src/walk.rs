use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::obfuscate::RootSegment;
use crate::s3::{ObjectStore, Result, key_for, upload_file};

/// Options controlling a folder upload
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub root_segment: RootSegment,
    /// Show a spinner counting uploaded files
    pub show_progress: bool,
}

/// Upload every regular file under `root`, one at a time
///
/// Entries are visited depth-first in file name order. The first traversal
/// or upload error stops the walk and is returned; files after it are never
/// attempted. Returns the number of uploaded files.
pub async fn upload_folder<S: ObjectStore>(
    store: &S,
    root: &Path,
    options: &UploadOptions,
) -> Result<usize> {
    info!("Uploading {} to {}", root.display(), store.location());

    let pb = if options.show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {pos} uploaded {msg}")
                .unwrap(),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = walk_and_upload(store, root, options, &pb).await;
    pb.finish_and_clear();
    result
}

async fn walk_and_upload<S: ObjectStore>(
    store: &S,
    root: &Path,
    options: &UploadOptions,
    pb: &ProgressBar,
) -> Result<usize> {
    let mut uploaded = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            continue;
        }
        if !file_type.is_file() {
            debug!("Skipping non-regular file {}", entry.path().display());
            continue;
        }

        let path = entry.path();
        let key = key_for(root, path, options.root_segment)?;
        pb.suspend(|| {
            println!(
                "{} {} -> {}",
                style("Uploading:").cyan(),
                path.display(),
                key
            )
        });
        pb.set_message(key);

        upload_file(store, root, path, options.root_segment).await?;
        uploaded += 1;
        pb.inc(1);
    }

    Ok(uploaded)
}
