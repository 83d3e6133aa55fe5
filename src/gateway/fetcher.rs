use crate::{
    error::{GatewayError, Result},
    models::{Media, SavedMedia},
};
use futures::StreamExt;
use reqwest::{Client, StatusCode};
use tokio::{fs::File, io::AsyncWriteExt};

/// Resolves relative media URLs against the gateway host and persists the
/// downloaded bytes. The absolute URL is plain string concatenation, as the
/// gateway hands back paths that are already routable.
#[derive(Clone)]
pub struct MediaFetcher {
    client: Client,
    host: String,
}

impl MediaFetcher {
    pub fn new(client: Client, host: impl Into<String>) -> Self {
        Self {
            client,
            host: host.into(),
        }
    }

    /// Download a media asset and write it to `destination` in one buffered
    /// write, truncating any existing file. Nothing is written unless the
    /// endpoint answers HTTP 200.
    pub async fn download(&self, media: &Media, destination: &str) -> Result<SavedMedia> {
        let url = format!("{}{}", self.host, media.url);
        log::info!("Downloading media from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::RequestError(e.to_string()))?;

        if response.status() != StatusCode::OK {
            log::error!("Unable to download the media: HTTP {}", response.status());
            return Err(GatewayError::DownloadError(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::ResponseError(e.to_string()))?;

        std::fs::write(destination, &bytes).map_err(|e| GatewayError::IoError(e.to_string()))?;
        log::info!("Media downloaded successfully to {}", destination);

        Ok(SavedMedia {
            path: destination.to_string(),
            len: bytes.len() as u64,
        })
    }

    /// Download a media asset writing it chunk by chunk. Used for video
    /// output, which can be too large to buffer comfortably. A failed write
    /// mid-stream leaves a partial file behind.
    pub async fn download_streamed(&self, media: &Media, destination: &str) -> Result<SavedMedia> {
        let url = format!("{}{}", self.host, media.url);
        log::info!("Downloading media from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::RequestError(e.to_string()))?;

        if response.status() != StatusCode::OK {
            log::error!("Unable to download the media: HTTP {}", response.status());
            return Err(GatewayError::DownloadError(response.status().as_u16()));
        }

        let mut file = File::create(destination)
            .await
            .map_err(|e| GatewayError::IoError(e.to_string()))?;

        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| GatewayError::ResponseError(e.to_string()))?;
            file.write_all(&chunk)
                .await
                .map_err(|e| GatewayError::IoError(e.to_string()))?;
            written += chunk.len() as u64;
        }
        file.flush()
            .await
            .map_err(|e| GatewayError::IoError(e.to_string()))?;

        log::info!("Media downloaded successfully to {}", destination);

        Ok(SavedMedia {
            path: destination.to_string(),
            len: written,
        })
    }
}
