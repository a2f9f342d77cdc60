//! Downloads a single file through the HTTP executor.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example fetch -- https://example.com/a.zip a.zip
//! ```

use color_eyre::{eyre::eyre, Result};
use courier::{DownloadAdapter, HttpExecutorBuilder};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let url = args.next().ok_or_else(|| eyre!("usage: fetch <url> <file name>"))?;
    let file_path = args.next().ok_or_else(|| eyre!("usage: fetch <url> <file name>"))?;

    let executor = HttpExecutorBuilder::new()
        .directory(PathBuf::from("downloads"))
        .build()?;

    DownloadAdapter::new(executor)
        .download_file(&url, &file_path)
        .await?;

    Ok(())
}
