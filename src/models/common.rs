use serde::{Deserialize, Serialize};

use super::image::{ImageToImageRequest, TextToImageRequest};
use super::video::ImageToVideoRequest;

/// One generated media asset. The `url` is relative and must be resolved
/// against the configured gateway host before it can be downloaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
}

/// Wire response shared by all three generation routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaResponse {
    pub images: Vec<Media>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    TextToImage,
    ImageToImage,
    ImageToVideo,
}

impl OperationKind {
    pub fn route(&self) -> &'static str {
        match self {
            OperationKind::TextToImage => "/text-to-image",
            OperationKind::ImageToImage => "/image-to-image",
            OperationKind::ImageToVideo => "/image-to-video",
        }
    }

    /// Fixed destination filename in the current working directory.
    pub fn output_filename(&self) -> &'static str {
        match self {
            OperationKind::TextToImage => "image.png",
            OperationKind::ImageToImage => "I2I_output.png",
            OperationKind::ImageToVideo => "I2V_output.mp4",
        }
    }
}

/// A generation job, parameterized by operation kind.
#[derive(Debug, Clone)]
pub enum GenerationJob {
    TextToImage(TextToImageRequest),
    ImageToImage(ImageToImageRequest),
    ImageToVideo(ImageToVideoRequest),
}

impl GenerationJob {
    pub fn kind(&self) -> OperationKind {
        match self {
            GenerationJob::TextToImage(_) => OperationKind::TextToImage,
            GenerationJob::ImageToImage(_) => OperationKind::ImageToImage,
            GenerationJob::ImageToVideo(_) => OperationKind::ImageToVideo,
        }
    }
}

/// A media file persisted to the local working directory.
#[derive(Debug, Clone, Serialize)]
pub struct SavedMedia {
    pub path: String,
    pub len: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_response_wire_shape() {
        let body = r#"{"images":[{"url":"/stream/abc/result.png","seed":42,"nsfw":false}]}"#;
        let response: MediaResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.images.len(), 1);
        assert_eq!(response.images[0].url, "/stream/abc/result.png");
        assert_eq!(response.images[0].seed, Some(42));
    }

    #[test]
    fn test_media_response_optional_fields() {
        let body = r#"{"images":[{"url":"/stream/abc/result.mp4"}]}"#;
        let response: MediaResponse = serde_json::from_str(body).unwrap();
        assert!(response.images[0].seed.is_none());
        assert!(response.images[0].nsfw.is_none());
    }

    #[test]
    fn test_output_filenames() {
        assert_eq!(OperationKind::TextToImage.output_filename(), "image.png");
        assert_eq!(OperationKind::ImageToImage.output_filename(), "I2I_output.png");
        assert_eq!(OperationKind::ImageToVideo.output_filename(), "I2V_output.mp4");
    }

    #[test]
    fn test_job_kind_routes() {
        let job = GenerationJob::TextToImage(TextToImageRequest {
            prompt: "A Cat on the Beach!".to_string(),
            model_id: None,
            width: None,
            height: None,
            negative_prompt: None,
            num_images: None,
        });
        assert_eq!(job.kind(), OperationKind::TextToImage);
        assert_eq!(job.kind().route(), "/text-to-image");
    }
}
