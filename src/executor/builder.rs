//! Builder for [`HttpExecutor`] instances.
//!
//! ```rust
//! use courier::executor::HttpExecutorBuilder;
//! use reqwest::header::{self, HeaderValue};
//!
//! # fn example() -> Result<(), courier::ExecutorError> {
//! let executor = HttpExecutorBuilder::new()
//!     .directory("downloads".into())
//!     .header(header::USER_AGENT, HeaderValue::from_static("courier/0.1"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use super::{config::ExecutorConfig, http::HttpExecutor};
use crate::error::Result;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::path::PathBuf;

/// A builder used to create an [`HttpExecutor`].
#[derive(Default)]
pub struct HttpExecutorBuilder {
    config: ExecutorConfig,
}

impl HttpExecutorBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        HttpExecutorBuilder::default()
    }

    /// Sets the downloads directory.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Routes every request through `proxy`.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    ///
    /// See also [`header()`].
    ///
    /// [`header()`]: HttpExecutorBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add a single http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`HttpExecutor`] with the specified options.
    ///
    /// Fails with [`ExecutorError::Network`](crate::ExecutorError::Network)
    /// when the underlying HTTP client cannot be initialised.
    pub fn build(self) -> Result<HttpExecutor> {
        HttpExecutor::new(self.config)
    }
}
