pub mod client;
pub mod error;
pub mod store;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use client::S3Client;
pub use error::{Error, Result};
pub use store::{DryRunStore, ObjectStore};
pub use upload::{key_for, upload_file};
