#[derive(Debug, Clone)]
pub struct ImageToVideoRequest {
    pub image: Vec<u8>,
    pub model_id: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<u32>,
}
