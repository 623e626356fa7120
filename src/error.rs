use std::fmt;

#[derive(Debug)]
pub enum LogoForgeError {
    ConfigError(String),
    /// No API key was supplied for the session. Checked before any remote call.
    MissingApiKey,
    RequestError(String),
    ResponseError(String),
    SerializationError(String),
    /// The image service answered but produced zero images.
    NoImageGenerated,
    /// The generated image URL could not be downloaded (non-200 status).
    DownloadError { status: u16 },
    IoError(String),
}

impl fmt::Display for LogoForgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoForgeError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            LogoForgeError::MissingApiKey => {
                write!(f, "No OpenAI API key configured; set one before generating")
            }
            LogoForgeError::RequestError(msg) => write!(f, "Request error: {}", msg),
            LogoForgeError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            LogoForgeError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            LogoForgeError::NoImageGenerated => {
                write!(f, "The image service returned no images for this prompt")
            }
            LogoForgeError::DownloadError { status } => {
                write!(f, "Failed to download logo image (HTTP {})", status)
            }
            LogoForgeError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for LogoForgeError {}

pub type Result<T> = std::result::Result<T, LogoForgeError>;
