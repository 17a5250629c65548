use super::config::PipelineConfig;
use crate::error::PipelineError;
use folio_layout::{PageGeometry, PaginationOutcome, paginate_with_geometry};
use folio_template::TemplateDefinition;
use folio_types::RuntimeData;

/// A validated template ready to be previewed against runtime data.
///
/// Page geometry is resolved once at construction; each preview is a pure
/// function of the template and the data passed in.
#[derive(Debug, Clone)]
pub struct PreviewPipeline {
    template: TemplateDefinition,
    geometry: PageGeometry,
    config: PipelineConfig,
}

impl PreviewPipeline {
    pub fn new(template: TemplateDefinition, config: PipelineConfig) -> Result<Self, PipelineError> {
        let geometry = PageGeometry::resolve(&template)?;
        log::debug!(
            "Content budget: {:.0}px on page 1, {:.0}px on continuation pages",
            geometry.available_height_first_page,
            geometry.available_height_other_pages
        );
        Ok(Self {
            template,
            geometry,
            config,
        })
    }

    pub fn template(&self) -> &TemplateDefinition {
        &self.template
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn config(&self) -> PipelineConfig {
        self.config
    }

    /// Paginates the bill content against `data`.
    pub fn preview(&self, data: &RuntimeData) -> PaginationOutcome<'_> {
        paginate_with_geometry(&self.template, data, self.geometry, self.config)
    }

    /// Parses runtime data from JSON, paginates, and returns the page layout
    /// as JSON.
    pub fn preview_json(&self, data_json: &str) -> Result<String, PipelineError> {
        let data: RuntimeData = serde_json::from_str(data_json).map_err(PipelineError::Data)?;
        let outcome = self.preview(&data);
        serde_json::to_string(&outcome).map_err(PipelineError::Serialize)
    }
}
