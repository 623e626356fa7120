use crate::{
    error::{LogoForgeError, Result},
    openai::traits::ArtifactFetch,
};
use async_trait::async_trait;
use reqwest::Client;

/// Downloads the generated image over plain HTTP GET. Exactly one attempt;
/// anything other than 200 is the distinct download error.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[async_trait]
impl ArtifactFetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        log::info!("Downloading generated logo");
        log::debug!("Artifact URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LogoForgeError::RequestError(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(LogoForgeError::DownloadError {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LogoForgeError::ResponseError(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
