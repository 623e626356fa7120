use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub model_id: Option<String>,
    pub num_images: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ImageGenerationResponse {
    /// URL of the first generated image.
    pub url: String,
    pub model: String,
    pub revised_prompt: Option<String>,
}

// OpenAI images/generations wire format. Quality and style are fixed for
// logo work: "hd" and "natural".

#[derive(Serialize)]
pub struct ImageApiRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub quality: String,
    pub style: String,
    pub response_format: String,
}

#[derive(Deserialize)]
pub struct ImageApiResponse {
    pub data: Vec<ImageDescriptor>,
}

#[derive(Deserialize)]
pub struct ImageDescriptor {
    pub url: Option<String>,
    pub revised_prompt: Option<String>,
}
