// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::profile::models::AvatarPolicy;
use crate::domain::profile::repos::ProfileSnapshotRepository;

pub type DynProfileSnapshotRepository = Arc<dyn ProfileSnapshotRepository>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The storage key the profile snapshot is saved under.
    pub storage_key: String,
    pub avatar_policy: AvatarPolicy,
}

impl AppConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "profile";
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            avatar_policy: AvatarPolicy::default(),
        }
    }
}
