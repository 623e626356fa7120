pub mod config;
pub mod error;
pub mod fetch;
pub mod logger;
pub mod models;
pub mod openai;
pub mod pipeline;
pub mod profile;
pub mod prompts;

pub use config::OpenAiConfig;
pub use error::{LogoForgeError, Result};
pub use fetch::HttpFetcher;
pub use models::{
    Artifact, ImageGenerationRequest, ImageGenerationResponse, TextGenerationRequest,
    TextGenerationResponse, DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE,
};
pub use openai::{ImageClient, OpenAiClient, TextClient};
pub use pipeline::{LogoSession, PipelineState};
pub use profile::{
    BrandType, BrandTone, BrandingProfile, ColorPalette, LogoComposition, LogoStyle, UsageContext,
};
