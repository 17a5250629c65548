// src/pipeline/builder.rs
use super::config::PipelineConfig;
use super::preview::PreviewPipeline;
use crate::error::PipelineError;
use folio_template::TemplateDefinition;
use std::fs;
use std::io;
use std::path::Path;

/// A builder for creating a `PreviewPipeline`.
#[derive(Default)]
pub struct PipelineBuilder {
    template: Option<TemplateDefinition>,
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Configures the pipeline by loading a JSON template from a file.
    pub fn with_template_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read template from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.with_template_source(&source)
    }

    /// Configures the pipeline with a JSON template from a string.
    pub fn with_template_source(mut self, source: &str) -> Result<Self, PipelineError> {
        self.template = Some(TemplateDefinition::from_json(source)?);
        Ok(self)
    }

    /// Configures the pipeline with a programmatically-built template.
    pub fn with_template_object(mut self, template: TemplateDefinition) -> Result<Self, PipelineError> {
        template.validate()?;
        self.template = Some(template);
        Ok(self)
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Disables the single-page shortcut so every preview takes the full walk.
    pub fn with_fast_path(mut self, enabled: bool) -> Self {
        self.config = self.config.with_fast_path(enabled);
        self
    }

    pub fn build(self) -> Result<PreviewPipeline, PipelineError> {
        let template = self.template.ok_or(PipelineError::MissingTemplate)?;
        PreviewPipeline::new(template, self.config)
    }
}
