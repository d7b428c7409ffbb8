//! Core data contracts shared across the crate: option sides, validated market
//! inputs, value types, and the error taxonomy.

mod serialization;
mod types;

pub use serialization::{from_json, to_json, to_json_pretty};
pub use types::{Moneyness, OptionPrice, OptionQuote, OptionType};

/// Errors surfaced by the analytics API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Input validation error: a precondition such as strict positivity of
    /// spot or strike was violated. Surfaced immediately, never coerced into
    /// NaN or infinity.
    InvalidInput(String),
    /// A chain-level aggregate has no defined value on the given snapshot,
    /// e.g. put-call ratio with zero total call open interest.
    AggregateUndefined(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::AggregateUndefined(msg) => write!(f, "aggregate undefined: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}
