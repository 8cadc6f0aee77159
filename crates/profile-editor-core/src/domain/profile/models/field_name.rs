// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumIter, EnumString};

/// The fixed set of fields making up a profile, in display and storage order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
)]
pub enum FieldName {
    #[strum(serialize = "First Name")]
    FirstName,
    #[strum(serialize = "Last Name")]
    LastName,
    Position,
    Phone,
    Address,
    Interests,
    Link,
    Avatar,
    Visibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single line of text.
    Text,
    /// An ordered sequence of text entries.
    List,
    /// One value out of a closed set.
    Choice,
}

impl FieldName {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::FirstName
            | Self::LastName
            | Self::Position
            | Self::Phone
            | Self::Address
            | Self::Avatar => FieldKind::Text,
            Self::Interests | Self::Link => FieldKind::List,
            Self::Visibility => FieldKind::Choice,
        }
    }
}
