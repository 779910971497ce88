pub mod config;
pub mod obfuscate;
pub mod s3;
pub mod walk;

pub use config::Config;
pub use obfuscate::{RootSegment, hash_segment, obfuscate_path, object_key};
pub use s3::{DryRunStore, Error, ObjectStore, S3Client, upload_file};
pub use walk::{UploadOptions, upload_folder};
