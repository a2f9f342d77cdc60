//! Courier forwards download requests to an executor and traces how they
//! turned out.
//!
//! The adapter does no downloading itself. It hands a URL and a destination
//! name to a [`DownloadExecutor`], logs success or failure through
//! [`tracing`], and returns the executor's error unchanged when there is one.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use courier::{DownloadAdapter, ExecutorError, HttpExecutorBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), ExecutorError> {
//! let executor = HttpExecutorBuilder::new()
//!     .directory(PathBuf::from("downloads"))
//!     .build()?;
//! let adapter = DownloadAdapter::new(executor);
//! adapter
//!     .download_file("https://github.com/seanmonstar/reqwest/archive/refs/tags/v0.11.9.zip", "reqwest.zip")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`adapter`] - The `DownloadAdapter` and the `download_file` shorthand
//! - [`executor`] - The `DownloadExecutor` trait and the bundled `HttpExecutor`
//! - [`request`] - The payload passed to executors
//! - [`error`] - Error kinds raised by the bundled executor
//! - [`http`] - HTTP client construction

pub mod adapter;
pub mod error;
pub mod executor;
pub mod http;
pub mod request;

pub use adapter::{download_file, DownloadAdapter, DOWNLOADS_DIR};
pub use error::{ExecutorError, Result};
pub use executor::{
    DownloadExecutor, ExecutorConfig, HttpExecutor, HttpExecutorBuilder, DOWNLOAD_COMMAND,
};
pub use http::{create_http_client, HttpClientConfig};
pub use request::DownloadRequest;
