// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppConfig;
pub use app::dtos;
pub use app::services::{ProfileStore, SaveError};
pub use domain::validation::{validate, validate_field, validate_record};
pub use profile_store_builder::{ProfileStoreBuilder, UndefinedRepository};

pub mod app;
pub mod domain;
pub mod infra;
mod profile_store_builder;
