use crate::{
    config::OpenAiConfig,
    error::{LogoForgeError, Result},
    fetch::HttpFetcher,
    models::{Artifact, ImageGenerationRequest, TextGenerationRequest},
    openai::{ArtifactFetch, ImageGeneration, OpenAiClient, TextGeneration},
    profile::BrandingProfile,
    prompts,
};
use std::sync::Arc;

/// Where the session currently is in the generate cycle. Returns to
/// `Submitting` from either terminal state on the next submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Request-scoped context for logo generation. Owns the credential, the three
/// stage handles, and the result slot for the most recent successful run.
///
/// `generate` takes `&mut self`, so a session has at most one generation in
/// flight; a new success overwrites the previous artifact.
pub struct LogoSession {
    config: OpenAiConfig,
    synthesizer: Arc<dyn TextGeneration>,
    designer: Arc<dyn ImageGeneration>,
    fetcher: Arc<dyn ArtifactFetch>,
    last_artifact: Option<Artifact>,
    state: PipelineState,
}

impl LogoSession {
    pub fn new(config: OpenAiConfig) -> Self {
        let client = OpenAiClient::new(config.clone());

        Self {
            config,
            synthesizer: Arc::new(client.text().clone()),
            designer: Arc::new(client.image().clone()),
            fetcher: Arc::new(HttpFetcher::default()),
            last_artifact: None,
            state: PipelineState::Idle,
        }
    }

    /// Builds a session over caller-supplied stages. Used by tests to stub
    /// out the remote services.
    pub fn with_stages(
        config: OpenAiConfig,
        synthesizer: Arc<dyn TextGeneration>,
        designer: Arc<dyn ImageGeneration>,
        fetcher: Arc<dyn ArtifactFetch>,
    ) -> Self {
        Self {
            config,
            synthesizer,
            designer,
            fetcher,
            last_artifact: None,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn last_artifact(&self) -> Option<&Artifact> {
        self.last_artifact.as_ref()
    }

    /// Runs the full pipeline for one profile submission: synthesize the logo
    /// prompt, generate the image, download and persist it.
    ///
    /// The credential is checked before any remote call; without it no stage
    /// runs. Any stage error aborts the invocation and leaves a previously
    /// generated artifact untouched. No retries.
    pub async fn generate(&mut self, profile: &BrandingProfile) -> Result<&Artifact> {
        if self.config.api_key.is_none() {
            log::warn!("Generation blocked: no API key configured");
            return Err(LogoForgeError::MissingApiKey);
        }

        self.state = PipelineState::Submitting;
        log::info!("Starting logo generation for brand: {}", profile.brand_name);

        match self.run_stages(profile).await {
            Ok(artifact) => {
                self.state = PipelineState::Succeeded;
                log::info!("Logo generated successfully");
                Ok(self.last_artifact.insert(artifact))
            }
            Err(e) => {
                self.state = PipelineState::Failed;
                log::error!("Logo generation failed: {}", e);
                Err(e)
            }
        }
    }

    async fn run_stages(&self, profile: &BrandingProfile) -> Result<Artifact> {
        let prompt_response = self
            .synthesizer
            .generate(TextGenerationRequest {
                instructions: prompts::synthesis_instructions(),
                input: profile.to_profile_text(),
                model_id: None,
                temperature: None,
            })
            .await?;

        // The synthesized prompt is used verbatim, prefixed by the fixed
        // design instruction block.
        let design_prompt = format!(
            "{}\n\n{}",
            prompts::design_instructions(),
            prompt_response.text
        );

        let image = self
            .designer
            .generate(ImageGenerationRequest {
                prompt: design_prompt,
                model_id: None,
                num_images: Some(1),
            })
            .await?;

        let bytes = self.fetcher.fetch(&image.url).await?;
        Artifact::persist(image.url, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageGenerationResponse, TextGenerationResponse};
    use async_trait::async_trait;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct StubSynthesizer {
        response: String,
        calls: AtomicUsize,
    }

    impl StubSynthesizer {
        fn new(response: &str) -> Arc<Self> {
            Arc::new(Self {
                response: response.to_string(),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TextGeneration for StubSynthesizer {
        async fn generate(
            &self,
            _request: TextGenerationRequest,
        ) -> Result<TextGenerationResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(TextGenerationResponse {
                text: self.response.clone(),
                model: "stub-text".into(),
                finish_reason: Some("stop".into()),
            })
        }
    }

    struct StubDesigner {
        url: Option<String>,
        calls: AtomicUsize,
        seen_prompts: Mutex<Vec<String>>,
    }

    impl StubDesigner {
        fn returning(url: &str) -> Arc<Self> {
            Arc::new(Self {
                url: Some(url.to_string()),
                calls: AtomicUsize::new(0),
                seen_prompts: Mutex::new(Vec::new()),
            })
        }

        fn empty() -> Arc<Self> {
            Arc::new(Self {
                url: None,
                calls: AtomicUsize::new(0),
                seen_prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ImageGeneration for StubDesigner {
        async fn generate(
            &self,
            request: ImageGenerationRequest,
        ) -> Result<ImageGenerationResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_prompts.lock().unwrap().push(request.prompt);
            match &self.url {
                Some(url) => Ok(ImageGenerationResponse {
                    url: url.clone(),
                    model: "stub-image".into(),
                    revised_prompt: None,
                }),
                None => Err(LogoForgeError::NoImageGenerated),
            }
        }
    }

    /// Pops one canned fetch result per call, in order.
    struct StubFetcher {
        results: Mutex<Vec<Result<Vec<u8>>>>,
        calls: AtomicUsize,
    }

    impl StubFetcher {
        fn with_results(results: Vec<Result<Vec<u8>>>) -> Arc<Self> {
            Arc::new(Self {
                results: Mutex::new(results),
                calls: AtomicUsize::new(0),
            })
        }

        fn ok(bytes: Vec<u8>) -> Arc<Self> {
            Self::with_results(vec![Ok(bytes)])
        }

        fn not_found() -> Arc<Self> {
            Self::with_results(vec![Err(LogoForgeError::DownloadError { status: 404 })])
        }
    }

    #[async_trait]
    impl ArtifactFetch for StubFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.results.lock().unwrap().remove(0)
        }
    }

    fn test_config() -> OpenAiConfig {
        OpenAiConfig::new().with_api_key("sk-test")
    }

    fn session(
        synthesizer: Arc<StubSynthesizer>,
        designer: Arc<StubDesigner>,
        fetcher: Arc<StubFetcher>,
    ) -> LogoSession {
        LogoSession::with_stages(test_config(), synthesizer, designer, fetcher)
    }

    #[tokio::test]
    async fn missing_credential_blocks_before_any_remote_call() {
        let synthesizer = StubSynthesizer::new("a prompt");
        let designer = StubDesigner::returning("https://img.example/logo.png");
        let fetcher = StubFetcher::ok(vec![1]);

        let mut session = LogoSession::with_stages(
            OpenAiConfig::new(),
            synthesizer.clone(),
            designer.clone(),
            fetcher.clone(),
        );

        let err = session
            .generate(&BrandingProfile::new("Acme"))
            .await
            .unwrap_err();

        assert!(matches!(err, LogoForgeError::MissingApiKey));
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 0);
        assert_eq!(designer.calls.load(Ordering::SeqCst), 0);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.state(), PipelineState::Idle);
    }

    #[tokio::test]
    async fn synthesized_prompt_is_passed_through_verbatim() {
        let synthesizer = StubSynthesizer::new("A minimalist fox logo, centered");
        let designer = StubDesigner::returning("https://img.example/logo.png");
        let fetcher = StubFetcher::ok(vec![0xAB]);

        let mut s = session(synthesizer, designer.clone(), fetcher);
        s.generate(&BrandingProfile::new("Foxly")).await.unwrap();

        let prompts_seen = designer.seen_prompts.lock().unwrap();
        assert_eq!(prompts_seen.len(), 1);
        let expected = format!(
            "{}\n\nA minimalist fox logo, centered",
            crate::prompts::design_instructions()
        );
        assert_eq!(prompts_seen[0], expected);
    }

    #[tokio::test]
    async fn successful_run_persists_the_downloaded_bytes() {
        let payload = vec![0x89, 0x50, 0x4e, 0x47];
        let synthesizer = StubSynthesizer::new("prompt");
        let designer = StubDesigner::returning("https://img.example/logo.png");
        let fetcher = StubFetcher::ok(payload.clone());

        let mut s = session(synthesizer, designer, fetcher);
        let artifact = s.generate(&BrandingProfile::new("Acme")).await.unwrap();

        assert_eq!(artifact.bytes, payload);
        assert_eq!(artifact.url, "https://img.example/logo.png");
        assert_eq!(artifact.download_file_name(), "generated_logo.png");
        assert_eq!(artifact.mime_type(), "image/png");
        assert_eq!(fs::read(&artifact.path).unwrap(), payload);

        let path = artifact.path.clone();
        assert_eq!(s.state(), PipelineState::Succeeded);
        fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn empty_image_result_surfaces_as_typed_error() {
        let synthesizer = StubSynthesizer::new("prompt");
        let designer = StubDesigner::empty();
        let fetcher = StubFetcher::ok(vec![1]);

        let mut s = session(synthesizer, designer, fetcher.clone());
        let err = s.generate(&BrandingProfile::new("Acme")).await.unwrap_err();

        assert!(matches!(err, LogoForgeError::NoImageGenerated));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
        assert!(s.last_artifact().is_none());
        assert_eq!(s.state(), PipelineState::Failed);
    }

    #[tokio::test]
    async fn download_failure_is_the_specific_message_and_stores_nothing() {
        let synthesizer = StubSynthesizer::new("prompt");
        let designer = StubDesigner::returning("https://img.example/gone.png");
        let fetcher = StubFetcher::not_found();

        let mut s = session(synthesizer, designer, fetcher);
        let err = s.generate(&BrandingProfile::new("Acme")).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to download logo image (HTTP 404)");
        assert!(s.last_artifact().is_none());
        assert_eq!(s.state(), PipelineState::Failed);
    }

    #[tokio::test]
    async fn failed_run_leaves_the_previous_artifact_untouched() {
        let first_payload = vec![1, 2, 3];
        let synthesizer = StubSynthesizer::new("prompt");
        let designer = StubDesigner::returning("https://img.example/logo.png");
        let fetcher = StubFetcher::with_results(vec![
            Ok(first_payload.clone()),
            Err(LogoForgeError::DownloadError { status: 500 }),
        ]);

        let mut s = session(synthesizer, designer, fetcher);
        let profile = BrandingProfile::new("Acme");

        s.generate(&profile).await.unwrap();
        assert!(s.generate(&profile).await.is_err());

        let kept = s.last_artifact().expect("first artifact should survive");
        assert_eq!(kept.bytes, first_payload);
        assert_eq!(s.state(), PipelineState::Failed);
        fs::remove_file(&kept.path).ok();
    }

    #[tokio::test]
    async fn new_success_overwrites_the_result_slot() {
        let synthesizer = StubSynthesizer::new("prompt");
        let designer = StubDesigner::returning("https://img.example/logo.png");
        let fetcher = StubFetcher::with_results(vec![Ok(vec![1]), Ok(vec![2, 2])]);

        let mut s = session(synthesizer.clone(), designer, fetcher);
        let profile = BrandingProfile::new("Acme");

        let first_path = s.generate(&profile).await.unwrap().path.clone();
        s.generate(&profile).await.unwrap();

        let current = s.last_artifact().unwrap();
        assert_eq!(current.bytes, vec![2, 2]);
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 2);

        fs::remove_file(first_path).ok();
        fs::remove_file(&current.path).ok();
    }
}
