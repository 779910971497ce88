use sha2::{Digest, Sha256};
use std::path::{Component, Path};

/// Number of hex characters kept from the SHA-256 digest (64 bits)
pub const SEGMENT_HASH_LEN: usize = 16;

/// How files sitting directly under the upload root are keyed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RootSegment {
    /// Key is the bare file name
    #[default]
    Omit,
    /// Key is prefixed with the hash of the current-directory marker `.`,
    /// matching buckets written by older uploaders
    Hashed,
}

/// Hash a single path segment into a fixed 16 character lowercase hex string
///
/// The hash is unsalted: the same segment always maps to the same output,
/// wherever it appears in the tree.
pub fn hash_segment(segment: &str) -> String {
    let mut encoded = hex::encode(Sha256::digest(segment.as_bytes()));
    encoded.truncate(SEGMENT_HASH_LEN);
    encoded
}

/// Hash every segment of `path` independently and join them with `/`
///
/// Splits on the host's path separators. A leading separator produces an
/// empty first segment, which is hashed like any other.
pub fn obfuscate_path(path: &str) -> String {
    path.split(std::path::is_separator)
        .map(hash_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the object key for a path relative to the upload root
///
/// Every directory level becomes one hashed segment; the file name is kept
/// as is. Returns `None` when the path has no file name.
pub fn object_key(relative: &Path, root_segment: RootSegment) -> Option<String> {
    let file_name = relative.file_name()?.to_string_lossy();

    let segments: Vec<String> = relative
        .parent()
        .map(|dir| {
            dir.components()
                .filter_map(|c| match c {
                    Component::Normal(s) => Some(hash_segment(&s.to_string_lossy())),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    let key = if !segments.is_empty() {
        format!("{}/{}", segments.join("/"), file_name)
    } else {
        match root_segment {
            RootSegment::Omit => file_name.into_owned(),
            RootSegment::Hashed => format!("{}/{}", hash_segment("."), file_name),
        }
    };

    Some(key)
}
