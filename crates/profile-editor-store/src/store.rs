use std::ops::Deref;
use std::sync::Arc;

use crate::driver::Driver;
use crate::Database;

pub struct Store<D: Driver> {
    db: Arc<D::Database>,
}

impl<D: Driver> Clone for Store<D> {
    fn clone(&self) -> Self {
        Store {
            db: self.db.clone(),
        }
    }
}

impl<D: Driver> Store<D> {
    pub fn open(driver: D) -> Result<Self, D::Error> {
        Ok(Self {
            db: Arc::new(driver.open()?),
        })
    }
}

impl<D: Driver> Deref for Store<D> {
    type Target = D::Database;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

impl<D: Driver> Store<D> {
    pub fn get(&self, key: &str) -> Result<Option<String>, D::Error> {
        self.db.get_item(key)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), D::Error> {
        self.db.set_item(key, value)
    }

    pub fn delete(&self, key: &str) -> Result<(), D::Error> {
        self.db.remove_item(key)
    }

    pub fn contains_key(&self, key: &str) -> Result<bool, D::Error> {
        self.db.contains_key(key)
    }

    pub fn truncate(&self) -> Result<(), D::Error> {
        self.db.clear()
    }
}
