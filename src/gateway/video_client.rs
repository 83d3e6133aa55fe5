use crate::{
    error::{GatewayError, Result},
    models::{ImageToVideoRequest, MediaResponse, OperationKind},
};
use reqwest::{multipart, Client, RequestBuilder};

#[derive(Clone)]
pub struct VideoClient {
    client: Client,
    host: String,
    api_key: Option<String>,
}

impl VideoClient {
    pub fn new(client: Client, host: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            host: host.into(),
            api_key,
        }
    }

    pub async fn image_to_video(&self, request: ImageToVideoRequest) -> Result<MediaResponse> {
        let model_id = request
            .model_id
            .as_deref()
            .unwrap_or("stabilityai/stable-video-diffusion-img2vid-xt-1-1")
            .to_string();

        log::info!("Generating video with model: {}", model_id);

        let image_part = multipart::Part::bytes(request.image)
            .file_name("image.png")
            .mime_str("image/png")
            .map_err(|e| GatewayError::RequestError(e.to_string()))?;

        let mut form = multipart::Form::new()
            .text("model_id", model_id)
            .part("image", image_part);
        if let Some(width) = request.width {
            form = form.text("width", width.to_string());
        }
        if let Some(height) = request.height {
            form = form.text("height", height.to_string());
        }
        if let Some(fps) = request.fps {
            form = form.text("fps", fps.to_string());
        }

        let url = format!("{}{}", self.host, OperationKind::ImageToVideo.route());
        let response = self
            .authorize(self.client.post(&url).multipart(form))
            .send()
            .await
            .map_err(|e| GatewayError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Gateway rejected the request: {} - {}", status, body);
            return Err(GatewayError::ApiError(format!("{} - {}", status, body)));
        }

        response
            .json::<MediaResponse>()
            .await
            .map_err(|e| GatewayError::ResponseError(e.to_string()))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }
}
