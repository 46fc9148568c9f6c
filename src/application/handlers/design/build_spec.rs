//! BuildSpecHandler - Command handler for building design specifications.

use std::sync::Arc;

use crate::domain::spec::{render_brief, BuildSpecRequest, DesignSpecification, SpecBuilder, SpecError};

/// Command to build one design specification.
#[derive(Debug, Clone)]
pub struct BuildSpecCommand {
    pub request: BuildSpecRequest,
}

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildSpecResult {
    pub specification: DesignSpecification,
    pub brief: String,
}

/// Handler for building specifications.
pub struct BuildSpecHandler {
    builder: Arc<SpecBuilder>,
}

impl BuildSpecHandler {
    pub fn new(builder: Arc<SpecBuilder>) -> Self {
        Self { builder }
    }

    pub fn handle(&self, cmd: BuildSpecCommand) -> Result<BuildSpecResult, SpecError> {
        let specification = match self.builder.build(&cmd.request) {
            Ok(spec) => spec,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    code = %e.code(),
                    theme = %cmd.request.theme,
                    mood = %cmd.request.mood,
                    "Failed to build design specification"
                );
                return Err(e);
            }
        };

        let brief = render_brief(&specification, self.builder.registry());

        tracing::info!(
            theme = %specification.theme(),
            mood = %specification.mood(),
            layout = %specification.layout_archetype(),
            seed = %specification.seed(),
            "Design specification built"
        );

        Ok(BuildSpecResult {
            specification,
            brief,
        })
    }
}
