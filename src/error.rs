// src/error.rs
use folio_layout::LayoutError;
use folio_template::TemplateError;
use thiserror::Error;

/// A comprehensive error type for the preview pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Template is invalid: {0}")]
    Template(#[from] TemplateError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Runtime data is invalid: {0}")]
    Data(#[source] serde_json::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No template was configured before building the pipeline")]
    MissingTemplate,
}
