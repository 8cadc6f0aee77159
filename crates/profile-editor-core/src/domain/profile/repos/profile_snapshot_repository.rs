// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::domain::profile::models::ProfileRecord;

/// Durable home of the single saved profile snapshot.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileSnapshotRepository: Send + Sync {
    /// Returns the saved record, `Ok(None)` if nothing was saved, or an error if the stored
    /// snapshot can't be read or decoded.
    fn get(&self) -> Result<Option<ProfileRecord>>;

    /// Overwrites the saved snapshot with `record`.
    fn set(&self, record: &ProfileRecord) -> Result<()>;

    fn delete(&self) -> Result<()>;
}
