// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// A user-correctable problem with a field value. The `Display` output is the message shown
/// next to the field.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Must be between 2 and 50 characters")]
    NameLength,

    #[error("Only letters and spaces are allowed (e.g., 'Anna-Maria')")]
    FirstNameCharacters,

    #[error("Only letters and spaces are allowed")]
    LastNameCharacters,

    #[error("Position cannot exceed 100 characters")]
    PositionTooLong,

    #[error("Only letters, numbers, and spaces are allowed")]
    PositionCharacters,

    #[error("Invalid phone number format (e.g., +79999999999)")]
    PhoneFormat,

    #[error("Address cannot exceed 200 characters")]
    AddressTooLong,

    #[error("Only letters, numbers, commas, periods, hyphens, and spaces are allowed")]
    AddressCharacters,

    #[error("Maximum of 10 tags")]
    TooManyTags,

    #[error("Each tag must not exceed 30 characters")]
    TagTooLong,

    #[error("Only letters, numbers, spaces, commas, and periods are allowed")]
    TagCharacters,

    #[error("Link cannot exceed 200 characters")]
    LinkTooLong,

    #[error("Invalid URL (must start with http:// or https://)")]
    InvalidUrl,

    #[error("Value must be 'Public' or 'Private'")]
    InvalidVisibility,

    #[error("Only .jpg, .jpeg, and .png formats are supported")]
    AvatarFormat,

    #[error("File size must not exceed 5 MB")]
    AvatarTooLarge,
}
