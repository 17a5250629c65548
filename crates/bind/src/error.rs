use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    #[error("Bind path is empty")]
    Empty,

    #[error("Bind path parse error in '{0}': {1}")]
    Parse(String, String),
}
