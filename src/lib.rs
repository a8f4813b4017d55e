pub mod context;
pub mod geometry;
pub mod numeric;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    #[error("Dimension Mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Undefined Direction: {0}")]
    UndefinedDirection(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use bigdecimal::BigDecimal;
pub use context::ArithmeticContext;
pub use geometry::AngleUnit;
pub use numeric::IntoCoordinate;
pub use vector::Vector;
