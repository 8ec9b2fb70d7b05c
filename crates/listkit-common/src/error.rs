use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A record handed to a keyed lookup has no field with that name.
    #[error("item {index} has no field named `{key}`")]
    MissingKey { key: String, index: usize },
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

pub type Result<T> = std::result::Result<T, ListError>;
