//! Data models for the library

pub mod book;
pub mod person;

// Re-export commonly used types
pub use book::{Book, BookDto, BookRangeQuery};
pub use person::{Person, PersonDto};

use serde::{Deserialize, Deserializer};

/// Reads a missing or `null` field as its default, leaving the decision to
/// the validators.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
