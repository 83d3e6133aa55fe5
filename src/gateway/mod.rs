pub mod fetcher;
pub mod image_client;
pub mod video_client;

use crate::{
    config::GatewayConfig,
    error::{GatewayError, Result},
    models::{GenerationJob, MediaResponse, OperationKind, SavedMedia},
};
use reqwest::Client;

pub use fetcher::MediaFetcher;
pub use image_client::ImageClient;
pub use video_client::VideoClient;

#[derive(Clone)]
pub struct DreamGatewayClient {
    image_client: ImageClient,
    video_client: VideoClient,
    fetcher: MediaFetcher,
}

impl DreamGatewayClient {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let host = config.host().to_string();
        let client = Client::builder()
            .build()
            .map_err(|e| GatewayError::ClientError(e.to_string()))?;

        Ok(Self {
            image_client: ImageClient::new(client.clone(), &host, config.api_key.clone()),
            video_client: VideoClient::new(client.clone(), &host, config.api_key),
            fetcher: MediaFetcher::new(client, &host),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn video(&self) -> &VideoClient {
        &self.video_client
    }

    pub fn fetcher(&self) -> &MediaFetcher {
        &self.fetcher
    }

    /// Submit a generation job without touching the filesystem.
    pub async fn submit(&self, job: GenerationJob) -> Result<MediaResponse> {
        match job {
            GenerationJob::TextToImage(request) => self.image_client.text_to_image(request).await,
            GenerationJob::ImageToImage(request) => self.image_client.image_to_image(request).await,
            GenerationJob::ImageToVideo(request) => self.video_client.image_to_video(request).await,
        }
    }

    /// Run a job end to end: submit it, take the first media descriptor from
    /// the response, download it, and persist it under the operation's fixed
    /// output filename in the current working directory.
    ///
    /// An empty media sequence halts the run before any download is issued.
    pub async fn generate_to_file(&self, job: GenerationJob) -> Result<SavedMedia> {
        let kind = job.kind();
        let response = self.submit(job).await?;

        let media = response
            .images
            .first()
            .ok_or_else(|| GatewayError::ResponseError("no media returned".into()))?;

        match kind {
            OperationKind::ImageToVideo => {
                self.fetcher
                    .download_streamed(media, kind.output_filename())
                    .await
            }
            _ => self.fetcher.download(media, kind.output_filename()).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageToVideoRequest, TextToImageRequest};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn t2i_request(prompt: &str) -> TextToImageRequest {
        TextToImageRequest {
            prompt: prompt.to_string(),
            model_id: None,
            width: None,
            height: None,
            negative_prompt: None,
            num_images: None,
        }
    }

    fn test_client(host: String) -> DreamGatewayClient {
        DreamGatewayClient::new(GatewayConfig::new().with_host(host)).unwrap()
    }

    #[tokio::test]
    async fn test_text_to_image_pipeline_creates_output_file() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/text-to-image"))
            .and(body_json(serde_json::json!({
                "model_id": "ByteDance/SDXL-Lightning",
                "prompt": "A Cat on the Beach!"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "images": [{"url": "/stream/abc/out.png", "seed": 7, "nsfw": false}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stream/abc/out.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"imagebytes".to_vec()))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let saved = client
            .generate_to_file(GenerationJob::TextToImage(t2i_request("A Cat on the Beach!")))
            .await
            .unwrap();

        assert_eq!(saved.path, "image.png");
        assert_eq!(saved.len, 10);
        assert_eq!(std::fs::read("image.png").unwrap().len(), 10);
        std::fs::remove_file("image.png").unwrap();
    }

    #[tokio::test]
    async fn test_image_to_video_pipeline_returns_video_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/image-to-video"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "images": [{"url": "/stream/def/out.mp4"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stream/def/out.mp4"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 2048]))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let saved = client
            .generate_to_file(GenerationJob::ImageToVideo(ImageToVideoRequest {
                image: vec![1, 2, 3],
                model_id: None,
                width: Some(128),
                height: Some(128),
                fps: None,
            }))
            .await
            .unwrap();

        assert_eq!(saved.path, "I2V_output.mp4");
        assert!(saved.len > 0);
        assert!(std::path::Path::new("I2V_output.mp4").exists());
        std::fs::remove_file("I2V_output.mp4").unwrap();
    }

    #[tokio::test]
    async fn test_empty_media_sequence_halts_before_download() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/text-to-image"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "images": [] })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let result = client
            .generate_to_file(GenerationJob::TextToImage(t2i_request("anything")))
            .await;

        assert!(matches!(result, Err(GatewayError::ResponseError(_))));
    }

    #[tokio::test]
    async fn test_api_rejection_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/text-to-image"))
            .respond_with(ResponseTemplate::new(400).set_body_string("model not found"))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let result = client.submit(GenerationJob::TextToImage(t2i_request("x"))).await;

        match result {
            Err(GatewayError::ApiError(msg)) => assert!(msg.contains("model not found")),
            other => panic!("expected ApiError, got {:?}", other),
        }
    }
}
