use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextToImageRequest {
    pub prompt: String,
    pub model_id: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub negative_prompt: Option<String>,
    pub num_images: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ImageToImageRequest {
    pub prompt: String,
    pub image: Vec<u8>,
    pub model_id: Option<String>,
    pub strength: Option<f32>,
}
