// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use profile_store::{ProfileStore, SaveError};

mod profile_store;
