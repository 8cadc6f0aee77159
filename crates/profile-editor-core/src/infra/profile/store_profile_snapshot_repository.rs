// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::debug;

use profile_editor_store::prelude::*;

use crate::domain::profile::models::ProfileRecord;
use crate::domain::profile::repos::ProfileSnapshotRepository;

use super::{decode_snapshot, encode_snapshot};

pub struct StoreProfileSnapshotRepository<D: Driver> {
    store: Store<D>,
    key: String,
}

impl<D: Driver> StoreProfileSnapshotRepository<D> {
    pub fn new(store: Store<D>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl<D: Driver> ProfileSnapshotRepository for StoreProfileSnapshotRepository<D> {
    fn get(&self) -> Result<Option<ProfileRecord>> {
        let Some(json) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        Ok(Some(decode_snapshot(&json)?))
    }

    fn set(&self, record: &ProfileRecord) -> Result<()> {
        let json = encode_snapshot(record)?;
        debug!("Writing profile snapshot ({} bytes)…", json.len());
        self.store.set(&self.key, &json)?;
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        self.store.delete(&self.key)?;
        Ok(())
    }
}
