use thiserror::Error;

#[derive(Error, Debug)]
pub enum StashError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Comment index {index} out of range for item {video_id}")]
    CommentIndexOutOfRange { video_id: String, index: usize },

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StashError>;
