use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Malformed column tree or engine configuration. Raised at construction only.
    #[error("invalid grid configuration: {0}")]
    Configuration(String),

    #[error("accessor for column `{column_id}` failed: {message}")]
    Accessor { column_id: String, message: String },

    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    #[error("column `{0}` is not resizable")]
    ResizeNotAllowed(String),

    #[error("column `{0}` is not pinnable")]
    PinNotAllowed(String),

    #[error("column `{0}` cannot be hidden")]
    HideNotAllowed(String),

    #[error("resize already in progress for column `{active}` (requested `{requested}`)")]
    ConcurrentResize { active: String, requested: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
