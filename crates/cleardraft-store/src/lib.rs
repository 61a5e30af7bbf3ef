//! In-memory stores: live document, annotations, version history, and the
//! session that ties them to the text services.

mod annotations;
mod archive;
mod document;
mod error;
pub mod pipeline;
mod session;

pub use annotations::AnnotationStore;
pub use archive::VersionArchive;
pub use document::DocumentStore;
pub use error::StoreError;
pub use pipeline::{restore_version, save_version};
pub use session::{RestorePolicy, Session};
