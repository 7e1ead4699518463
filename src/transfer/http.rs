use crate::core::path::ensure_dir;
use crate::core::{DebarError, DebarResult};
use crate::di::Retriever;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, Response};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// User agent sent with every request. Some mirrors reject unknown clients.
pub const APT_USER_AGENT: &str = "Debian APT-HTTP/1.3 (1.0.1ubuntu2)";

/// Retriever that downloads over HTTP(S) with reqwest
pub struct HttpRetriever {
    client: Client,
    show_progress: bool,
}

impl HttpRetriever {
    /// Create a retriever that draws a progress bar per download
    pub fn new() -> DebarResult<Self> {
        let client = Client::builder().user_agent(APT_USER_AGENT).build()?;
        Ok(Self {
            client,
            show_progress: true,
        })
    }

    /// Disable progress bars
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Download `url` into `destination`
    ///
    /// Nothing on disk is touched until the server answers with a success
    /// status. Once the body starts streaming, a failure removes the
    /// partially written file.
    pub async fn fetch(&self, url: &str, destination: &Path) -> DebarResult<()> {
        tracing::debug!(url, destination = %destination.display(), "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DebarError::transfer(url, e))?;

        if !response.status().is_success() {
            return Err(DebarError::transfer(
                url,
                format!("HTTP status {}", response.status()),
            ));
        }

        if let Some(parent) = destination.parent() {
            ensure_dir(parent)?;
        }
        let file = tokio::fs::File::create(destination).await?;

        let result = self.stream_body(url, response, file, destination).await;
        if result.is_err() {
            let _ = tokio::fs::remove_file(destination).await;
        }
        result
    }

    async fn stream_body(
        &self,
        url: &str,
        mut response: Response,
        mut file: tokio::fs::File,
        destination: &Path,
    ) -> DebarResult<()> {
        let label = destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| url.to_string());
        let pb = self.progress_bar(response.content_length(), label);

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| DebarError::transfer(url, e))?
        {
            file.write_all(&chunk).await?;
            pb.inc(chunk.len() as u64);
        }
        file.flush().await?;
        pb.finish_and_clear();

        Ok(())
    }

    fn progress_bar(&self, total: Option<u64>, label: String) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = match total {
            Some(len) => {
                let pb = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::with_template(
                    "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})",
                ) {
                    pb.set_style(style.progress_chars("#>-"));
                }
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} {bytes}") {
                    pb.set_style(style);
                }
                pb
            }
        };
        pb.set_message(format!("Downloading {}", label));
        pb
    }
}

// Implement Retriever trait
#[async_trait]
impl Retriever for HttpRetriever {
    async fn fetch(&self, url: &str, destination: &Path) -> DebarResult<()> {
        self.fetch(url, destination).await
    }
}
