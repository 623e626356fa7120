use crate::{
    error::Result,
    models::{
        ImageGenerationRequest, ImageGenerationResponse, TextGenerationRequest,
        TextGenerationResponse,
    },
};
use async_trait::async_trait;

/// Prompt-synthesis stage: branding profile text in, logo prompt out.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    async fn generate(&self, request: TextGenerationRequest) -> Result<TextGenerationResponse>;
}

/// Image-generation stage: logo prompt in, image URL out.
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGenerationResponse>;
}

/// Artifact download stage: image URL in, raw bytes out.
#[async_trait]
pub trait ArtifactFetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
