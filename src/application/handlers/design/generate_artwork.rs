//! GenerateArtworkHandler - Builds a specification and hands it to the
//! image generator.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::spec::{render_brief, BuildSpecRequest, DesignSpecification, SpecBuilder, SpecError};
use crate::ports::{GeneratedImage, GenerationError, ImageGenerator};

/// Command to build a specification and generate its artwork.
#[derive(Debug, Clone)]
pub struct GenerateArtworkCommand {
    pub request: BuildSpecRequest,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerateArtworkResult {
    pub specification: DesignSpecification,
    pub brief: String,
    pub image: GeneratedImage,
}

/// Errors from building or generating.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum GenerateArtworkError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl From<GenerateArtworkError> for DomainError {
    fn from(err: GenerateArtworkError) -> Self {
        match err {
            GenerateArtworkError::Spec(e) => e.into(),
            GenerateArtworkError::Generation(e) => e.into(),
        }
    }
}

/// Handler for artwork generation.
pub struct GenerateArtworkHandler {
    builder: Arc<SpecBuilder>,
    generator: Arc<dyn ImageGenerator>,
}

impl GenerateArtworkHandler {
    pub fn new(builder: Arc<SpecBuilder>, generator: Arc<dyn ImageGenerator>) -> Self {
        Self { builder, generator }
    }

    pub async fn handle(
        &self,
        cmd: GenerateArtworkCommand,
    ) -> Result<GenerateArtworkResult, GenerateArtworkError> {
        // 1. Build and validate the specification
        let specification = self.builder.build(&cmd.request)?;

        // 2. Render the brief
        let brief = render_brief(&specification, self.builder.registry());

        // 3. Generate
        let image = match self.generator.generate(&specification, &brief).await {
            Ok(image) => image,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    retryable = e.is_retryable(),
                    theme = %specification.theme(),
                    seed = %specification.seed(),
                    "Artwork generation failed"
                );
                return Err(e.into());
            }
        };

        tracing::info!(
            theme = %specification.theme(),
            mood = %specification.mood(),
            model = %image.model,
            "Artwork generated"
        );

        Ok(GenerateArtworkResult {
            specification,
            brief,
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::keywords::KeywordDetector;
    use crate::domain::registry::Registry;
    use crate::ports::Clock;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::Mutex;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
        }
    }

    struct MockImageGenerator {
        briefs: Mutex<Vec<String>>,
        failure: Option<GenerationError>,
    }

    impl MockImageGenerator {
        fn new() -> Self {
            Self {
                briefs: Mutex::new(Vec::new()),
                failure: None,
            }
        }

        fn failing(error: GenerationError) -> Self {
            Self {
                briefs: Mutex::new(Vec::new()),
                failure: Some(error),
            }
        }

        fn briefs(&self) -> Vec<String> {
            self.briefs.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ImageGenerator for MockImageGenerator {
        async fn generate(
            &self,
            spec: &DesignSpecification,
            brief: &str,
        ) -> Result<GeneratedImage, GenerationError> {
            self.briefs.lock().unwrap().push(brief.to_string());
            if let Some(error) = &self.failure {
                return Err(error.clone());
            }
            Ok(GeneratedImage {
                image_url: format!("https://images.test/{}.png", spec.theme()),
                model: "mock-diffusion".to_string(),
            })
        }
    }

    fn builder() -> Arc<SpecBuilder> {
        Arc::new(SpecBuilder::new(
            Registry::shared(),
            KeywordDetector::default(),
            Arc::new(FixedClock),
        ))
    }

    fn command() -> GenerateArtworkCommand {
        GenerateArtworkCommand {
            request: BuildSpecRequest::new("courage", "sunset").with_seed(99u64),
        }
    }

    #[tokio::test]
    async fn generates_image_from_rendered_brief() {
        let generator = Arc::new(MockImageGenerator::new());
        let handler = GenerateArtworkHandler::new(builder(), generator.clone());

        let result = handler.handle(command()).await.unwrap();

        assert_eq!(result.image.image_url, "https://images.test/courage.png");
        assert_eq!(generator.briefs(), vec![result.brief.clone()]);
        assert!(result.brief.contains(result.specification.headline()));
    }

    #[tokio::test]
    async fn spec_errors_skip_the_generator() {
        let generator = Arc::new(MockImageGenerator::new());
        let handler = GenerateArtworkHandler::new(builder(), generator.clone());
        let cmd = GenerateArtworkCommand {
            request: BuildSpecRequest::new("valor", "sunset"),
        };

        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(
            err,
            GenerateArtworkError::Spec(SpecError::UnknownTheme("valor".to_string()))
        );
        assert!(generator.briefs().is_empty());
    }

    #[tokio::test]
    async fn generation_errors_are_propagated() {
        let generator = Arc::new(MockImageGenerator::failing(GenerationError::RateLimited));
        let handler = GenerateArtworkHandler::new(builder(), generator);

        let err = handler.handle(command()).await.unwrap_err();

        assert_eq!(err, GenerateArtworkError::Generation(GenerationError::RateLimited));
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::RateLimited);
    }
}
