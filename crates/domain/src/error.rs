use crate::{ExerciseID, ExerciseIDError, NameError};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("exercise {0} not found")]
pub struct NotFoundError(pub ExerciseID);

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("duplicate exercise ID {0}")]
    DuplicateID(ExerciseID),
    #[error(transparent)]
    ID(#[from] ExerciseIDError),
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("no connection")]
    NoConnection,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
