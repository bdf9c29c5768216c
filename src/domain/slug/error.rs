use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("the slug can't be created, empty identifying text found")]
    EmptyIdentifyingText,
    #[error("no free slug derived from '{base}' after {attempts} attempts")]
    Exhausted { base: String, attempts: u32 },
    #[error("slug '{0}' is already taken")]
    PersistenceConflict(String),
}
