//! Error types for the editor

use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Page {0} not found")]
    PageNotFound(u64),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Translation service error: {0}")]
    Translation(String),
}
