use thiserror::Error;

/// Errors that can occur while converting an image to equations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("vectorization failed: {0}")]
    Vectorize(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
