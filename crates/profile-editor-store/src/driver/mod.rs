use crate::{Database, StoreError};

pub mod memory;
pub mod sqlite;

pub trait Driver: Send + 'static {
    type Error: StoreError + Send + Sync + 'static;
    type Database: Database<Error = Self::Error>;

    fn open(self) -> Result<Self::Database, Self::Error>;
}
