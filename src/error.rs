use std::path::PathBuf;

use thiserror::Error;

use crate::bitmap::FormatError;

/// A specialized `Result` type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// The error type for the search pipeline.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to decode bitmap {path:?}: {source}")]
    Bitmap { path: PathBuf, source: FormatError },

    #[error("template name '{name}' does not start with a numeric id")]
    TemplateId { name: String },

    #[error("search worker failed to complete: {source}")]
    WorkerJoin {
        #[from]
        source: tokio::task::JoinError,
    },

    #[error("result channel closed before the run completed")]
    ChannelClosed,
}
