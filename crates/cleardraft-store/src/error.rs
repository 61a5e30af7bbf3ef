use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("clause not found: {0}")]
    ClauseNotFound(String),

    #[error("version not found: {0}")]
    VersionNotFound(String),

    #[error("annotation text is blank")]
    BlankAnnotation,

    #[error("no clause selected")]
    NoClauseSelected,
}
