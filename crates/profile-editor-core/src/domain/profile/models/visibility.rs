// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Whether the profile is shown to others.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    /// Parses `value`, falling back to `Private` for anything that isn't an exact match.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default() {
        assert_eq!(Visibility::parse_or_default("Public"), Visibility::Public);
        assert_eq!(Visibility::parse_or_default("Private"), Visibility::Private);
        assert_eq!(Visibility::parse_or_default("public"), Visibility::Private);
        assert_eq!(Visibility::parse_or_default(""), Visibility::Private);
    }
}
