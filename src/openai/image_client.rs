use crate::{
    config::OpenAiConfig,
    error::{LogoForgeError, Result},
    models::{ImageApiRequest, ImageApiResponse, ImageGenerationRequest, ImageGenerationResponse},
    openai::traits::ImageGeneration,
};
use async_trait::async_trait;
use reqwest::Client;

/// Fixed generation parameters for logo work.
const IMAGE_QUALITY: &str = "hd";
const IMAGE_STYLE: &str = "natural";

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    config: OpenAiConfig,
}

impl ImageClient {
    pub fn new(client: Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or(LogoForgeError::MissingApiKey)
    }

    /// Extracts the first image descriptor. An empty descriptor list is a
    /// typed error, checked before indexing.
    fn first_image(model: String, result: ImageApiResponse) -> Result<ImageGenerationResponse> {
        let first = result
            .data
            .into_iter()
            .next()
            .ok_or(LogoForgeError::NoImageGenerated)?;

        let url = first
            .url
            .ok_or_else(|| LogoForgeError::ResponseError("image descriptor had no URL".into()))?;

        Ok(ImageGenerationResponse {
            url,
            model,
            revised_prompt: first.revised_prompt,
        })
    }
}

#[async_trait]
impl ImageGeneration for ImageClient {
    async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGenerationResponse> {
        let api_key = self.api_key()?;
        let model = request
            .model_id
            .as_deref()
            .unwrap_or_else(|| self.config.image_model())
            .to_string();

        let payload = ImageApiRequest {
            model: model.clone(),
            prompt: request.prompt,
            n: request.num_images.unwrap_or(1),
            quality: IMAGE_QUALITY.to_string(),
            style: IMAGE_STYLE.to_string(),
            response_format: "url".to_string(),
        };

        log::info!("Generating logo image with model: {}", model);

        let response = self
            .client
            .post(format!("{}/images/generations", self.config.base_url()))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| LogoForgeError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LogoForgeError::ResponseError(format!(
                "image generation failed with {}: {}",
                status, body
            )));
        }

        let result: ImageApiResponse = response
            .json()
            .await
            .map_err(|e| LogoForgeError::ResponseError(e.to_string()))?;

        Self::first_image(model, result)
    }
}
