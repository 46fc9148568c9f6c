//! ImageGenerator port - Interface for the downstream image-generation service.
//!
//! The engine hands a validated specification and its rendered brief to an
//! implementation of this port. Transport, retries and timeouts are the
//! adapter's concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::spec::DesignSpecification;

/// Port for turning a specification into artwork.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(
        &self,
        spec: &DesignSpecification,
        brief: &str,
    ) -> Result<GeneratedImage, GenerationError>;
}

/// Artwork returned by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    /// Hosted URL or `data:` URL of the raster image.
    pub image_url: String,
    /// Model that produced the image.
    pub model: String,
}

/// Errors reported by an image generator.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GenerationError {
    /// Provider rejected the request for exceeding its rate limit.
    #[error("rate limit exceeded, try again later")]
    RateLimited,

    /// Account has no generation credits left.
    #[error("generation credits exhausted")]
    CreditsExhausted,

    /// Any other non-success response.
    #[error("provider error {status}: {message}")]
    Provider { status: u16, message: String },

    /// Provider answered successfully but without an image.
    #[error("no image in provider response")]
    EmptyResponse,
}

impl GenerationError {
    /// Classifies a non-success HTTP status from the provider.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            429 => GenerationError::RateLimited,
            402 => GenerationError::CreditsExhausted,
            _ => GenerationError::Provider {
                status,
                message: message.into(),
            },
        }
    }

    /// Returns true if the same request may succeed later.
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationError::RateLimited => true,
            GenerationError::Provider { status, .. } => *status >= 500,
            GenerationError::CreditsExhausted | GenerationError::EmptyResponse => false,
        }
    }
}

impl From<GenerationError> for DomainError {
    fn from(err: GenerationError) -> Self {
        let code = match err {
            GenerationError::RateLimited => ErrorCode::RateLimited,
            _ => ErrorCode::GenerationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}
