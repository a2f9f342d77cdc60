//! Configuration for the HTTP executor.

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::path::PathBuf;

/// Directory, relative to the working directory, used when none is configured.
pub const DEFAULT_DIRECTORY: &str = "downloads";

/// Configuration structure for the [`HttpExecutor`](super::HttpExecutor).
#[derive(Clone, Debug)]
pub struct ExecutorConfig {
    /// Directory under which destination names are resolved.
    pub directory: PathBuf,
    /// Custom HTTP headers sent with every request.
    pub headers: Option<HeaderMap>,
    /// Optional proxy configuration.
    pub proxy: Option<reqwest::Proxy>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default().join(DEFAULT_DIRECTORY),
            headers: None,
            proxy: None,
        }
    }
}
