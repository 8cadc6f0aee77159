use std::path::PathBuf;

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::Driver;
use crate::{Database, StoreError};

const STORAGE_TABLE: &str = "__local_storage";

pub struct SqliteDriver {
    path: PathBuf,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError for Error {}

impl SqliteDriver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SqliteDriver { path: path.into() }
    }
}

impl Driver for SqliteDriver {
    type Error = Error;
    type Database = SqliteDB;

    fn open(self) -> Result<Self::Database, Self::Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut conn = Connection::open(&self.path)?;

        conn.trace(Some(|query| {
            debug!("{}", query);
        }));

        conn.execute_batch(
            r#"
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = normal;
            PRAGMA journal_size_limit = 6144000;
            "#,
        )?;

        conn.execute_batch(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS "{}" (
                "key" TEXT PRIMARY KEY,
                "value" TEXT NOT NULL
            )"#,
            STORAGE_TABLE
        ))?;

        Ok(SqliteDB {
            conn: Mutex::new(conn),
        })
    }
}

pub struct SqliteDB {
    conn: Mutex<Connection>,
}

impl Database for SqliteDB {
    type Error = Error;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let conn = self.conn.lock();
        let value = conn
            .query_row(
                &format!(r#"SELECT "value" FROM "{}" WHERE "key" = ?"#, STORAGE_TABLE),
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let conn = self.conn.lock();
        conn.execute(
            &format!(
                r#"INSERT OR REPLACE INTO "{}" ("key", "value") VALUES (?, ?)"#,
                STORAGE_TABLE
            ),
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        let conn = self.conn.lock();
        conn.execute(
            &format!(r#"DELETE FROM "{}" WHERE "key" = ?"#, STORAGE_TABLE),
            params![key],
        )?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, Self::Error> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!(
            r#"SELECT "key" FROM "{}" ORDER BY "key" ASC"#,
            STORAGE_TABLE
        ))?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }

    fn clear(&self) -> Result<(), Self::Error> {
        let conn = self.conn.lock();
        conn.execute(&format!(r#"DELETE FROM "{}""#, STORAGE_TABLE), [])?;
        Ok(())
    }
}
