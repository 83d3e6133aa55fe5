use crate::{
    error::{GatewayError, Result},
    models::{ImageToImageRequest, MediaResponse, OperationKind, TextToImageRequest},
};
use reqwest::{multipart, Client, RequestBuilder};
use serde_json::json;

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    host: String,
    api_key: Option<String>,
}

impl ImageClient {
    pub fn new(client: Client, host: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            host: host.into(),
            api_key,
        }
    }

    pub async fn text_to_image(&self, request: TextToImageRequest) -> Result<MediaResponse> {
        let model_id = request
            .model_id
            .as_deref()
            .unwrap_or("ByteDance/SDXL-Lightning");

        let mut payload = json!({
            "model_id": model_id,
            "prompt": request.prompt,
        });
        if let Some(width) = request.width {
            payload["width"] = json!(width);
        }
        if let Some(height) = request.height {
            payload["height"] = json!(height);
        }
        if let Some(negative_prompt) = &request.negative_prompt {
            payload["negative_prompt"] = json!(negative_prompt);
        }
        if let Some(num_images) = request.num_images {
            payload["num_images_per_prompt"] = json!(num_images);
        }

        log::info!("Generating image with model: {}", model_id);
        log::debug!("Text-to-image request payload: {}", payload);

        let url = format!("{}{}", self.host, OperationKind::TextToImage.route());
        let response = self
            .authorize(self.client.post(&url).json(&payload))
            .send()
            .await
            .map_err(|e| GatewayError::RequestError(e.to_string()))?;

        self.decode_response(response).await
    }

    pub async fn image_to_image(&self, request: ImageToImageRequest) -> Result<MediaResponse> {
        let model_id = request
            .model_id
            .as_deref()
            .unwrap_or("timbrooks/instruct-pix2pix")
            .to_string();

        log::info!("Transforming image with model: {}", model_id);

        let image_part = multipart::Part::bytes(request.image)
            .file_name("image.png")
            .mime_str("image/png")
            .map_err(|e| GatewayError::RequestError(e.to_string()))?;

        let mut form = multipart::Form::new()
            .text("model_id", model_id)
            .text("prompt", request.prompt)
            .part("image", image_part);
        if let Some(strength) = request.strength {
            form = form.text("strength", strength.to_string());
        }

        let url = format!("{}{}", self.host, OperationKind::ImageToImage.route());
        let response = self
            .authorize(self.client.post(&url).multipart(form))
            .send()
            .await
            .map_err(|e| GatewayError::RequestError(e.to_string()))?;

        self.decode_response(response).await
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn decode_response(&self, response: reqwest::Response) -> Result<MediaResponse> {
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
}
