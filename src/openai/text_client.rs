use crate::{
    config::OpenAiConfig,
    error::{LogoForgeError, Result},
    models::{
        ChatCompletionRequest, ChatCompletionResponse, ChatMessage, TextGenerationRequest,
        TextGenerationResponse,
    },
    openai::traits::TextGeneration,
};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Clone)]
pub struct TextClient {
    client: Client,
    config: OpenAiConfig,
}

impl TextClient {
    pub fn new(client: Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or(LogoForgeError::MissingApiKey)
    }
}

#[async_trait]
impl TextGeneration for TextClient {
    async fn generate(&self, request: TextGenerationRequest) -> Result<TextGenerationResponse> {
        let api_key = self.api_key()?;
        let model = request
            .model_id
            .as_deref()
            .unwrap_or_else(|| self.config.text_model())
            .to_string();

        let payload = ChatCompletionRequest {
            model: model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.instructions,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.input,
                },
            ],
            temperature: request.temperature,
        };

        log::info!("Synthesizing logo prompt with model: {}", model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url()))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| LogoForgeError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LogoForgeError::ResponseError(format!(
                "chat completion failed with {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LogoForgeError::ResponseError(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LogoForgeError::ResponseError("no choices in completion".into()))?;

        log::debug!(
            "Received logo prompt ({} characters)",
            choice.message.content.len()
        );

        // The response content is the logo prompt, passed on verbatim.
        Ok(TextGenerationResponse {
            text: choice.message.content,
            model,
            finish_reason: choice.finish_reason,
        })
    }
}
