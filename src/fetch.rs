//! HTTP download plumbing for tool artifacts.
//!
//! Two shapes of download, matching the two install strategies: archives
//! are streamed straight to disk (they can run to the gigabytes), installer
//! packages are buffered whole and written in one shot.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{OutfitterError, Result};

/// Blocking HTTP client for artifact downloads.
pub struct ArtifactFetcher {
    client: reqwest::blocking::Client,
}

impl ArtifactFetcher {
    pub fn new() -> Self {
        // A toolchain download is allowed to take as long as it takes, so
        // the per-request timeout is disabled.
        let client = reqwest::blocking::Client::builder()
            .user_agent("outfitter")
            .timeout(None)
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    /// Streams `url` to `dest` chunk by chunk without buffering the body.
    pub fn download_to(&self, url: &str, dest: &Path) -> Result<()> {
        debug!(url, dest = %dest.display(), "starting streamed download");
        let mut response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(OutfitterError::DownloadFailed {
                url: url.to_string(),
                status: response.status().to_string(),
            });
        }
        let mut file = File::create(dest)?;
        let bytes = io::copy(&mut response, &mut file)?;
        debug!(bytes, "download complete");
        Ok(())
    }

    /// Buffers the whole body in memory before writing it to `dest`.
    pub fn download_buffered(&self, url: &str, dest: &Path) -> Result<()> {
        debug!(url, dest = %dest.display(), "starting buffered download");
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(OutfitterError::DownloadFailed {
                url: url.to_string(),
                status: response.status().to_string(),
            });
        }
        let body = response.bytes()?;
        std::fs::write(dest, &body)?;
        debug!(bytes = body.len(), "download complete");
        Ok(())
    }
}

impl Default for ArtifactFetcher {
    fn default() -> Self {
        Self::new()
    }
}
