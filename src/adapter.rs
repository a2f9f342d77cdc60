//! The download request adapter.
//!
//! [`DownloadAdapter::download_file`] forwards a `(url, file_path)` pair to a
//! [`DownloadExecutor`] and waits for it to settle. The outcome is traced
//! exactly once: an info event when the executor succeeds, an error event
//! when it fails. Failures are handed back to the caller untouched.
//!
//! # Examples
//!
//! ```rust
//! use async_trait::async_trait;
//! use courier::{DownloadAdapter, DownloadExecutor, DownloadRequest};
//!
//! struct AlwaysOk;
//!
//! #[async_trait]
//! impl DownloadExecutor for AlwaysOk {
//!     type Error = String;
//!
//!     async fn download_file(&self, _request: DownloadRequest) -> Result<(), String> {
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let adapter = DownloadAdapter::new(AlwaysOk);
//! assert!(adapter
//!     .download_file("https://example.com/a.zip", "a.zip")
//!     .await
//!     .is_ok());
//! # }
//! ```

use crate::executor::{DownloadExecutor, DOWNLOAD_COMMAND};
use crate::request::DownloadRequest;

use tracing::{debug, error, info};

/// Name of the directory destination names are reported under.
pub const DOWNLOADS_DIR: &str = "downloads";

/// Forwards download requests to an executor.
///
/// The adapter keeps no state between calls: two identical calls reach the
/// executor twice.
#[derive(Debug, Clone)]
pub struct DownloadAdapter<E> {
    executor: E,
    downloads_label: String,
}

impl<E: DownloadExecutor> DownloadAdapter<E> {
    /// Creates an adapter delegating to `executor`.
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            downloads_label: DOWNLOADS_DIR.to_string(),
        }
    }

    /// Sets the directory label used in the success message.
    ///
    /// Only the log line is affected; where the file lands is decided by the
    /// executor.
    pub fn downloads_label(mut self, label: impl Into<String>) -> Self {
        self.downloads_label = label.into();
        self
    }

    /// Gets the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Asks the executor to download `url` to `file_path`.
    ///
    /// Neither argument is validated here. On failure the executor's error is
    /// returned as is.
    pub async fn download_file(&self, url: &str, file_path: &str) -> Result<(), E::Error> {
        debug!(command = DOWNLOAD_COMMAND, url, file_path, "Invoking executor");
        match self
            .executor
            .download_file(DownloadRequest::new(url, file_path))
            .await
        {
            Ok(()) => {
                info!(
                    "File downloaded successfully to {}/{}",
                    self.downloads_label, file_path
                );
                Ok(())
            }
            Err(e) => {
                error!("Download failed: {}", e);
                Err(e)
            }
        }
    }
}

/// Asks `executor` to download `url` to `file_path`.
///
/// Shorthand for `DownloadAdapter::new(executor).download_file(url, file_path)`.
pub async fn download_file<E>(executor: &E, url: &str, file_path: &str) -> Result<(), E::Error>
where
    E: DownloadExecutor + ?Sized,
{
    DownloadAdapter::new(executor)
        .download_file(url, file_path)
        .await
}
