//! Folio paginates bill templates for preview and printing.
//!
//! A template's bill content (text fields plus tables bound to runtime rows)
//! is split into pages that respect the printable area, with tables cut
//! row-wise under repeated headers. The resulting page layout is handed to a
//! renderer, which binds values with [`bind`] and rasterizes each page.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{
    PipelineBuilder, PipelineConfig, PreviewJob, PreviewPipeline, ReanchorRule, preview_batch,
};

pub use folio_bind as bind;
pub use folio_layout as layout;
pub use folio_template as template;
pub use folio_types as types;

pub use folio_layout::{LayoutWarning, Page, PaginatedDocument, PaginationOutcome};
pub use folio_template::TemplateDefinition;
pub use folio_types::{Row, RuntimeData, Scalar};
