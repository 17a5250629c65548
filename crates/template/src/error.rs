use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid template at '{path}': {message}")]
    Invalid { path: String, message: String },
}

impl TemplateError {
    pub(crate) fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        TemplateError::Invalid {
            path: path.into(),
            message: message.into(),
        }
    }
}
