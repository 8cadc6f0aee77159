use std::collections::BTreeMap;
use std::convert::Infallible;

use parking_lot::RwLock;

use super::Driver;
use crate::Database;

/// Keeps all values in process memory. Nothing survives the process.
#[derive(Default)]
pub struct MemoryDriver {
    initial_items: BTreeMap<String, String>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the database with `value` under `key` when it's opened.
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.initial_items.insert(key.into(), value.into());
        self
    }
}

impl Driver for MemoryDriver {
    type Error = Infallible;
    type Database = MemoryDB;

    fn open(self) -> Result<Self::Database, Self::Error> {
        Ok(MemoryDB {
            items: RwLock::new(self.initial_items),
        })
    }
}

pub struct MemoryDB {
    items: RwLock<BTreeMap<String, String>>,
}

impl Database for MemoryDB {
    type Error = Infallible;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        self.items.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.items.read().keys().cloned().collect())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        self.items.write().clear();
        Ok(())
    }
}
