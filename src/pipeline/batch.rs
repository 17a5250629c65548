//! Runs independent previews, in parallel when the `rayon-executor` feature
//! is enabled.
use crate::error::PipelineError;
use folio_layout::{PaginationConfig, PaginationOutcome, paginate};
use folio_template::TemplateDefinition;
use folio_types::RuntimeData;

/// One template/data pair to paginate.
#[derive(Debug, Clone, Copy)]
pub struct PreviewJob<'a> {
    pub template: &'a TemplateDefinition,
    pub data: &'a RuntimeData,
}

impl<'a> PreviewJob<'a> {
    pub fn new(template: &'a TemplateDefinition, data: &'a RuntimeData) -> Self {
        Self { template, data }
    }

    fn run(self, config: PaginationConfig) -> Result<PaginationOutcome<'a>, PipelineError> {
        Ok(paginate(self.template, self.data, config)?)
    }
}

/// Paginates every job. Results keep the order of `jobs`.
#[cfg(feature = "rayon-executor")]
pub fn preview_batch<'a>(
    jobs: &[PreviewJob<'a>],
    config: PaginationConfig,
) -> Vec<Result<PaginationOutcome<'a>, PipelineError>> {
    use rayon::prelude::*;
    log::debug!("Paginating {} previews on the rayon pool", jobs.len());
    jobs.par_iter().map(|job| job.run(config)).collect()
}

/// Paginates every job. Results keep the order of `jobs`.
#[cfg(not(feature = "rayon-executor"))]
pub fn preview_batch<'a>(
    jobs: &[PreviewJob<'a>],
    config: PaginationConfig,
) -> Vec<Result<PaginationOutcome<'a>, PipelineError>> {
    jobs.iter().map(|job| job.run(config)).collect()
}
