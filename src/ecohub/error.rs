use thiserror::Error;

pub type Result<T> = std::result::Result<T, HubError>;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("I/O error: {0}")]
    Io(std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("image error: {0}")]
    Image(image::ImageError),

    #[error("store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("no post with id {0}")]
    PostNotFound(i64),

    #[error("authorization required; log in first")]
    Unauthorized,
}
