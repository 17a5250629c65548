pub mod fixtures;
pub mod layout_assertions;

use folio::{PipelineBuilder, PipelineError};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Paginate a JSON template against JSON runtime data and return the page
/// layout as a JSON value.
pub fn paginate_json(template: &Value, data: &Value) -> Result<Value, PipelineError> {
    let pipeline = PipelineBuilder::new()
        .with_template_source(&template.to_string())?
        .build()?;
    let layout = pipeline.preview_json(&data.to_string())?;
    serde_json::from_str(&layout).map_err(PipelineError::Serialize)
}
