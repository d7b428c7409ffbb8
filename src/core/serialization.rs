//! JSON helpers for transporting snapshots and analytics to UI layers.
//!
//! All public value types in the crate derive serde traits; these helpers give
//! callers a stable entry point without importing `serde_json` themselves.
//!
//! # Examples
//! ```rust
//! use optchain::core::{from_json, to_json_pretty, OptionQuote};
//!
//! let quote = OptionQuote::new(24_413.5, 24_400.0, 0.065, 0.18, 0.05);
//! let json = to_json_pretty(&quote).expect("json serialization");
//! let decoded: OptionQuote = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, quote);
//! ```

use serde::de::DeserializeOwned;

/// Serializes a value to compact JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serializes a value to pretty-printed JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserializes a value from a JSON payload.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}
