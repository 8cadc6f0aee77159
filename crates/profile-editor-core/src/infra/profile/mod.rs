// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use profile_snapshot::{decode_snapshot, encode_snapshot, SnapshotError};
pub use store_profile_snapshot_repository::StoreProfileSnapshotRepository;

mod profile_snapshot;
mod store_profile_snapshot_repository;
