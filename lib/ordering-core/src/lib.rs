// Internal
mod comparison;
mod error;
mod operator;
mod value;

#[cfg(feature = "json")]
mod conversion;

// Re-export core types
pub use comparison::{compare, order, Outcome};
pub use error::ComparisonError;
pub use operator::Operator;
pub use value::RuntimeValue;

#[cfg(feature = "json")]
pub use conversion::from_json_str;
