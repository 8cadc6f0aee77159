// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::profile::models::{
    AvatarImage, AvatarPolicy, FieldKind, FieldName, FieldValue, ProfileRecord, Visibility,
};
pub use crate::domain::validation::{ErrorKey, ErrorMap, ValidationError};
