//! A small durable key-value surface modelled after a browser's local storage.
//!
//! A [`Driver`](driver::Driver) opens a [`Database`], which is then wrapped in a cloneable
//! [`Store`](store::Store). Values are opaque strings; callers decide how to encode them.

use std::error::Error;

mod driver;
pub mod prelude;
mod store;

pub trait StoreError: Error {}

impl StoreError for std::convert::Infallible {}

pub trait Database: Send + Sync {
    type Error: StoreError + Send + Sync + 'static;

    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Stores `value` under `key`, replacing any previous value in a single write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), Self::Error>;

    /// Returns all keys in ascending order.
    fn keys(&self) -> Result<Vec<String>, Self::Error>;

    /// Removes every key.
    fn clear(&self) -> Result<(), Self::Error>;

    fn contains_key(&self, key: &str) -> Result<bool, Self::Error> {
        Ok(self.get_item(key)?.is_some())
    }
}
