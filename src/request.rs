//! The payload handed to a download executor.

use serde::{Deserialize, Serialize};

/// A request for an executor to download `url` to `file_path`.
///
/// Both values are carried verbatim: no parsing or validation happens here.
/// On the wire the request is an object with exactly two fields, `url` and
/// `filePath`.
///
/// ```rust
/// use courier::DownloadRequest;
///
/// let request = DownloadRequest::new("https://example.com/a.zip", "a.zip");
/// assert_eq!(request.url, "https://example.com/a.zip");
/// assert_eq!(request.file_path, "a.zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    /// Source location of the remote file.
    pub url: String,
    /// Destination name, relative to the executor's downloads directory.
    pub file_path: String,
}

impl DownloadRequest {
    /// Creates a new [`DownloadRequest`].
    pub fn new(url: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            file_path: file_path.into(),
        }
    }
}
