#![allow(dead_code)]

use async_trait::async_trait;
use courier::{DownloadExecutor, DownloadRequest, HttpExecutor, HttpExecutorBuilder};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

// Common test constants
pub const TEST_URL: &str = "https://example.com/a.zip";
pub const TEST_FILE: &str = "a.zip";
pub const TEST_USER_AGENT: &str = "courier-test-agent";
pub const SUCCESS_PREFIX: &str = "File downloaded successfully to";
pub const FAILURE_PREFIX: &str = "Download failed:";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Asserts that a file exists with the given content
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = std::fs::read(path).expect("Failed to read downloaded file");
    assert_eq!(content, expected, "File content mismatch at path: {:?}", path);
}

/// Creates test headers with common user agent
pub fn create_test_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(TEST_USER_AGENT));
    headers
}

/// Creates an HTTP executor writing into `dir`
pub fn create_test_executor(dir: &Path) -> HttpExecutor {
    HttpExecutorBuilder::new()
        .directory(dir.to_path_buf())
        .headers(create_test_headers())
        .build()
        .expect("Failed to build executor")
}

// === Fake Executor ===

/// Executor that records every request and answers with a fixed outcome
pub struct FakeExecutor {
    outcome: Result<(), String>,
    calls: Mutex<Vec<DownloadRequest>>,
}

impl FakeExecutor {
    pub fn succeeding() -> Self {
        Self {
            outcome: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            outcome: Err(error.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<DownloadRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DownloadExecutor for FakeExecutor {
    type Error = String;

    async fn download_file(&self, request: DownloadRequest) -> Result<(), String> {
        self.calls.lock().unwrap().push(request);
        self.outcome.clone()
    }
}

// === Log Capture ===

/// Buffer collecting everything the fmt subscriber writes
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Counts the log lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Installs a thread-local subscriber writing into a [`CapturedLogs`].
///
/// Keep the guard alive for as long as events should be captured.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

// === Truncating Server ===

/// Starts a server that answers one request with `200`, announces
/// `declared_len` body bytes but sends only `body` before closing.
///
/// Returns the URL to request.
pub async fn spawn_truncating_server(body: &'static [u8], declared_len: usize) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept");

        // Drain the request head before answering.
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
            declared_len
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(body).await;
        let _ = socket.flush().await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}/file.bin", addr)
}
