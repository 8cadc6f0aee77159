// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use avatar::{AvatarImage, AvatarPolicy};
pub use field_name::{FieldKind, FieldName};
pub use field_value::FieldValue;
pub use profile_record::ProfileRecord;
pub use visibility::Visibility;

mod avatar;
mod field_name;
mod field_value;
mod profile_record;
mod visibility;
