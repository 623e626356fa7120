pub mod image_client;
pub mod text_client;
pub mod traits;

use crate::config::OpenAiConfig;
use reqwest::Client;

pub use image_client::ImageClient;
pub use text_client::TextClient;
pub use traits::{ArtifactFetch, ImageGeneration, TextGeneration};

/// Aggregated handle over the two OpenAI capabilities the pipeline uses.
/// Both clients share one HTTP connection pool.
#[derive(Clone)]
pub struct OpenAiClient {
    text_client: TextClient,
    image_client: ImageClient,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        let http = Client::new();

        Self {
            text_client: TextClient::new(http.clone(), config.clone()),
            image_client: ImageClient::new(http, config),
        }
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
