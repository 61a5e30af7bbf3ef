pub mod model;
pub mod numbering;
pub mod seed;
pub mod text_service;
pub mod validate;

pub use model::{
    Annotation, ChangeStats, Clause, ClauseType, DEFAULT_AUTHOR, DocumentVersion,
    ValidationResult, new_id,
};
pub use numbering::{NEW_CLAUSE_LABEL, renumber};
pub use text_service::{ChangeSummarizer, ClauseAnalyzer};
pub use validate::validate;
