//! Executor that fetches files over HTTP(S).
//!
//! A single `GET` is issued per request. The body is streamed to a sibling
//! `<file_path>.part` file which replaces `<directory>/<file_path>` only once
//! the whole body has arrived; on failure the destination is left as it was.
//! There is no retry, resume or integrity check.

use super::{config::ExecutorConfig, DownloadExecutor};
use crate::error::{ExecutorError, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::request::DownloadRequest;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header::HeaderMap, Url};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

/// Downloads files with a [`reqwest`] client.
///
/// ```rust,no_run
/// use courier::{DownloadAdapter, HttpExecutorBuilder};
///
/// # async fn example() -> Result<(), courier::ExecutorError> {
/// let executor = HttpExecutorBuilder::new().directory("downloads".into()).build()?;
/// DownloadAdapter::new(executor)
///     .download_file("https://example.com/a.zip", "a.zip")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpExecutor {
    config: ExecutorConfig,
    client: ClientWithMiddleware,
}

impl fmt::Debug for HttpExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpExecutor")
            .field("config", &self.config)
            .finish()
    }
}

impl HttpExecutor {
    /// Creates a new executor with the given configuration.
    pub(crate) fn new(config: ExecutorConfig) -> Result<Self> {
        let client = create_http_client(HttpClientConfig {
            proxy: config.proxy.clone(),
            headers: config.headers.clone(),
        })?;
        Ok(Self { config, client })
    }

    /// Gets the downloads directory.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Resolves `file_path` against the downloads directory.
    ///
    /// The name must be relative and must not climb out of the directory.
    pub fn destination(&self, file_path: &str) -> Result<PathBuf> {
        let relative = Path::new(file_path);
        let mut named = false;
        for component in relative.components() {
            match component {
                Component::Normal(_) => named = true,
                Component::CurDir => {}
                _ => {
                    return Err(ExecutorError::InvalidArgument(format!(
                        "The destination \"{}\" escapes the downloads directory",
                        file_path
                    )))
                }
            }
        }
        if !named {
            return Err(ExecutorError::InvalidArgument(format!(
                "The destination \"{}\" does not name a file",
                file_path
            )));
        }
        Ok(self.config.directory.join(relative))
    }
}

#[async_trait]
impl DownloadExecutor for HttpExecutor {
    type Error = ExecutorError;

    async fn download_file(&self, request: DownloadRequest) -> Result<()> {
        let url = Url::parse(&request.url).map_err(|e| {
            ExecutorError::InvalidArgument(format!(
                "The url \"{}\" cannot be parsed: {}",
                request.url, e
            ))
        })?;
        let output = self.destination(&request.file_path)?;

        debug!("Fetching {}", &url);
        let res = self.client.get(url).send().await?.error_for_status()?;

        let output_dir = output.parent().unwrap_or(self.config.directory.as_path());
        debug!("Creating destination directory {:?}", output_dir);
        fs::create_dir_all(output_dir).await?;

        let part = part_path(&output);
        debug!("Writing body to {:?}", &part);
        let size = match write_body(res, &part).await {
            Ok(size) => size,
            Err(e) => {
                discard(&part).await;
                return Err(e);
            }
        };

        if let Err(e) = fs::rename(&part, &output).await {
            discard(&part).await;
            return Err(e.into());
        }

        debug!("Wrote {} bytes to {:?}", size, &output);
        Ok(())
    }
}

/// Temporary file the body is written to before it replaces `output`.
fn part_path(output: &Path) -> PathBuf {
    let mut part = output.as_os_str().to_owned();
    part.push(".part");
    PathBuf::from(part)
}

/// Streams the response body into `path`, returning the number of bytes written.
async fn write_body(res: reqwest::Response, path: &Path) -> Result<u64> {
    let mut file = fs::File::create(path).await?;

    let mut size: u64 = 0;
    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        let mut chunk = item?;
        size += chunk.len() as u64;
        file.write_all_buf(&mut chunk).await?;
    }
    file.flush().await?;

    Ok(size)
}

async fn discard(part: &Path) {
    if let Err(e) = fs::remove_file(part).await {
        debug!("Could not remove {:?}: {}", part, e);
    }
}
