//! Result set and result file.
//!
//! Vulnerable domains are appended to an in-memory list and, when `-o` is
//! given, to a file. Both happen under one lock, and the file is flushed after
//! every append so a crash loses at most the domain being written.

use std::path::Path;

use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::Mutex;

use crate::error_handling::InitializationError;

struct Inner {
    domains: Vec<String>,
    writer: Option<BufWriter<File>>,
}

/// Append-only list of vulnerable domains, shared by all workers.
pub struct ResultSink {
    inner: Mutex<Inner>,
}

impl ResultSink {
    /// A sink that only keeps results in memory.
    pub fn in_memory() -> Self {
        Self {
            inner: Mutex::new(Inner {
                domains: Vec::new(),
                writer: None,
            }),
        }
    }

    /// A sink that also appends each result to `path` (created if missing).
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ResultFileError` if the file cannot be
    /// opened for appending.
    pub async fn with_file(path: &Path) -> Result<Self, InitializationError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|source| InitializationError::ResultFileError {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self {
            inner: Mutex::new(Inner {
                domains: Vec::new(),
                writer: Some(BufWriter::new(file)),
            }),
        })
    }

    /// Appends a domain and, if a file is attached, writes and flushes it.
    ///
    /// The in-memory append always happens; a write failure is returned so
    /// the caller can report it without losing the result.
    pub async fn record(&self, domain: &str) -> std::io::Result<()> {
        let mut inner = self.inner.lock().await;
        inner.domains.push(domain.to_string());
        if let Some(writer) = inner.writer.as_mut() {
            writer.write_all(domain.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        Ok(())
    }

    /// Snapshot of the recorded domains, in append order.
    pub async fn domains(&self) -> Vec<String> {
        self.inner.lock().await.domains.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.domains.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_in_memory_keeps_order() {
        let sink = ResultSink::in_memory();
        sink.record("a.example.com").await.unwrap();
        sink.record("b.example.com").await.unwrap();
        assert_eq!(sink.domains().await, vec!["a.example.com", "b.example.com"]);
        assert_eq!(sink.len().await, 2);
    }

    #[tokio::test]
    async fn test_file_is_flushed_after_each_record() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("vulnerable.txt");
        let sink = ResultSink::with_file(&path).await.unwrap();

        sink.record("a.example.com").await.unwrap();
        // Visible without dropping the sink
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "a.example.com\n");

        sink.record("b.example.com").await.unwrap();
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "a.example.com\nb.example.com\n");
    }

    #[tokio::test]
    async fn test_file_is_appended_not_truncated() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("vulnerable.txt");
        tokio::fs::write(&path, "old.example.com\n").await.unwrap();

        let sink = ResultSink::with_file(&path).await.unwrap();
        sink.record("new.example.com").await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "old.example.com\nnew.example.com\n");
        // Only this run's results are in memory
        assert_eq!(sink.domains().await, vec!["new.example.com"]);
    }

    #[tokio::test]
    async fn test_with_file_unopenable_path() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("missing_dir").join("out.txt");
        let err = ResultSink::with_file(&path).await.err().expect("should fail");
        assert!(matches!(err, InitializationError::ResultFileError { .. }));
    }

    #[tokio::test]
    async fn test_concurrent_records_do_not_interleave() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("vulnerable.txt");
        let sink = Arc::new(ResultSink::with_file(&path).await.unwrap());

        let mut handles = Vec::new();
        for i in 0..50 {
            let sink = Arc::clone(&sink);
            handles.push(tokio::spawn(async move {
                sink.record(&format!("host{i}.example.com")).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 50);
        assert!(lines
            .iter()
            .all(|l| l.starts_with("host") && l.ends_with(".example.com")));
        assert_eq!(sink.len().await, 50);
    }
}
