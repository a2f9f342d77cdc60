//! The boundary between the adapter and whatever performs the download.
//!
//! A [`DownloadExecutor`] owns everything the adapter does not: the network
//! transfer, the filesystem writes and the resolution of destination names
//! against a downloads directory. The crate ships one implementation,
//! [`HttpExecutor`], built through [`HttpExecutorBuilder`].
//!
//! # Examples
//!
//! ## Implementing an executor
//!
//! ```rust
//! use async_trait::async_trait;
//! use courier::{DownloadExecutor, DownloadRequest};
//!
//! struct Refuse;
//!
//! #[async_trait]
//! impl DownloadExecutor for Refuse {
//!     type Error = String;
//!
//!     async fn download_file(&self, request: DownloadRequest) -> Result<(), String> {
//!         Err(format!("refusing to fetch {}", request.url))
//!     }
//! }
//! ```
//!
//! ## Using the HTTP executor
//!
//! ```rust
//! use courier::executor::HttpExecutorBuilder;
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), courier::ExecutorError> {
//! let executor = HttpExecutorBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod http;

pub use builder::HttpExecutorBuilder;
pub use config::{ExecutorConfig, DEFAULT_DIRECTORY};
pub use http::HttpExecutor;

use crate::request::DownloadRequest;

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::sync::Arc;

/// Name of the capability an executor provides.
pub const DOWNLOAD_COMMAND: &str = "download_file";

/// Something able to download a file on the adapter's behalf.
///
/// Implementations settle once: `Ok(())` when the file is in place, or an
/// error of their own choosing. The adapter never inspects or converts that
/// error, so its type is entirely up to the executor.
#[async_trait]
pub trait DownloadExecutor: Send + Sync {
    /// Error raised when a download fails.
    type Error: Display + Debug + Send + Sync + 'static;

    /// Downloads `request.url` to `request.file_path`.
    async fn download_file(&self, request: DownloadRequest) -> Result<(), Self::Error>;
}

#[async_trait]
impl<T> DownloadExecutor for Arc<T>
where
    T: DownloadExecutor + ?Sized,
{
    type Error = T::Error;

    async fn download_file(&self, request: DownloadRequest) -> Result<(), Self::Error> {
        (**self).download_file(request).await
    }
}

#[async_trait]
impl<'a, T> DownloadExecutor for &'a T
where
    T: DownloadExecutor + ?Sized,
{
    type Error = T::Error;

    async fn download_file(&self, request: DownloadRequest) -> Result<(), Self::Error> {
        (**self).download_file(request).await
    }
}
