// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use error_map::{ErrorKey, ErrorMap};
pub use validation_error::ValidationError;
pub use validator::{validate, validate_field, validate_record};

mod error_map;
mod validation_error;
mod validator;
