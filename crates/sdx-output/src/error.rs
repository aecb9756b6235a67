use thiserror::Error;

/// Errors raised while serializing or packaging downstream output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, OutputError>;
