use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreateFileError {
    #[error("{0}")]
    InvalidPath(String),

    #[error("The file already exists, but its content differs")]
    ContentConflict,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
