#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("{0}")]
    InvalidArgument(&'static str),
    // Whatever the store failed with, kept as is so callers can downcast it
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl DirectoryError {
    pub(crate) const NULL_CREDENTIALS: &'static str = "username or password is null";

    pub fn null_credentials() -> DirectoryError {
        DirectoryError::InvalidArgument(Self::NULL_CREDENTIALS)
    }
}
