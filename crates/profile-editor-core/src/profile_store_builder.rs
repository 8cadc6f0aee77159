// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use profile_editor_store::prelude::{Driver, Store};

use crate::app::deps::{AppConfig, DynProfileSnapshotRepository};
use crate::app::services::ProfileStore;
use crate::infra::profile::StoreProfileSnapshotRepository;

pub struct UndefinedRepository;

pub struct ProfileStoreBuilder<R> {
    config: AppConfig,
    repository: R,
}

impl ProfileStoreBuilder<UndefinedRepository> {
    pub(crate) fn new() -> Self {
        ProfileStoreBuilder {
            config: Default::default(),
            repository: UndefinedRepository,
        }
    }
}

impl<R> ProfileStoreBuilder<R> {
    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }
}

impl ProfileStoreBuilder<UndefinedRepository> {
    /// Saves the profile into `store` under the configured storage key.
    pub fn set_store<D: Driver>(self, store: Store<D>) -> ProfileStoreBuilder<Store<D>> {
        ProfileStoreBuilder {
            config: self.config,
            repository: store,
        }
    }

    pub fn set_snapshot_repository(
        self,
        repository: DynProfileSnapshotRepository,
    ) -> ProfileStoreBuilder<DynProfileSnapshotRepository> {
        ProfileStoreBuilder {
            config: self.config,
            repository,
        }
    }
}

impl<D: Driver> ProfileStoreBuilder<Store<D>> {
    /// Builds the store and loads the saved profile, if any.
    pub fn build(self) -> ProfileStore {
        let repository = Arc::new(StoreProfileSnapshotRepository::new(
            self.repository,
            self.config.storage_key.clone(),
        ));
        ProfileStoreBuilder {
            config: self.config,
            repository: repository as DynProfileSnapshotRepository,
        }
        .build()
    }
}

impl ProfileStoreBuilder<DynProfileSnapshotRepository> {
    /// Builds the store and loads the saved profile, if any.
    pub fn build(self) -> ProfileStore {
        let mut store = ProfileStore::new(self.repository, self.config);
        store.load();
        store
    }
}
