use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    /// Carousel definition carries no items and cannot be mounted.
    EmptyCarousel(String),
    /// Identifier was blank or otherwise unusable.
    InvalidId(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::EmptyCarousel(title) => {
                write!(f, "carousel '{title}' has no items")
            }
            ModelError::InvalidId(raw) => write!(f, "invalid id: {raw:?}"),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
