use std::sync::Mutex;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use super::error::{Error, Result};
use super::store::ObjectStore;

/// In-memory store recording every call, optionally failing one of them
#[derive(Debug, Default)]
pub struct MemoryStore {
    fail_on: Option<usize>,
    attempts: Mutex<Vec<String>>,
    objects: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryStore {
    /// Reject the `n`-th put (1-based) with an access denied error
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on: Some(n),
            ..Default::default()
        }
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn objects(&self) -> Vec<(String, Vec<u8>)> {
        self.objects.lock().unwrap().clone()
    }
}

impl ObjectStore for MemoryStore {
    fn location(&self) -> String {
        "memory://".to_string()
    }

    async fn put_object(&self, key: &str, mut body: File, _content_length: u64) -> Result<()> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(key.to_string());
            attempts.len()
        };

        if self.fail_on == Some(attempt) {
            return Err(Error::upload(
                key,
                "AccessDenied: The AWS Access Key Id you provided does not exist",
            ));
        }

        let mut bytes = Vec::new();
        body.read_to_end(&mut bytes)
            .await
            .map_err(|e| Error::upload(key, e))?;
        self.objects
            .lock()
            .unwrap()
            .push((key.to_string(), bytes));
        Ok(())
    }
}
