pub use crate::{driver::Driver, store::Store, Database, StoreError};

pub use crate::driver::memory::{MemoryDB, MemoryDriver};
pub use crate::driver::sqlite::{Error, SqliteDB, SqliteDriver};

pub use SqliteDriver as PlatformDriver;
