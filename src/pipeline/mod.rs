pub mod batch;
pub mod builder;
pub mod config;
pub mod preview;

pub use batch::{PreviewJob, preview_batch};
pub use builder::PipelineBuilder;
pub use config::{PipelineConfig, ReanchorRule};
pub use preview::PreviewPipeline;
