pub mod error;
pub mod repayment;
pub mod types;
pub mod validation;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-engine operations
pub type MortgageResult<T> = Result<T, MortgageError>;
