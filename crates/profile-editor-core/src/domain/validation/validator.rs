// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::borrow::Cow;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::profile::models::{FieldName, FieldValue, ProfileRecord};

use super::{ErrorKey, ErrorMap, ValidationError};

const NAME_MIN_LENGTH: usize = 2;
const NAME_MAX_LENGTH: usize = 50;
const POSITION_MAX_LENGTH: usize = 100;
const ADDRESS_MAX_LENGTH: usize = 200;
const MAX_TAGS: usize = 10;
const TAG_MAX_LENGTH: usize = 30;
const LINK_MAX_LENGTH: usize = 200;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё\s-]+$").expect("valid name regex"));
static POSITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё0-9\s]+$").expect("valid position regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("valid phone regex"));
static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё0-9\s,.\-]+$").expect("valid address regex"));
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё0-9\s.,]+$").expect("valid tag regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("valid link regex"));

/// Validates `value` for the field called `field_name`. Unknown field names are always valid.
pub fn validate(field_name: &str, value: &FieldValue) -> Option<ValidationError> {
    let Ok(field) = FieldName::from_str(field_name) else {
        return None;
    };
    validate_field(field, value)
}

pub fn validate_field(field: FieldName, value: &FieldValue) -> Option<ValidationError> {
    match field {
        FieldName::FirstName => {
            validate_name(&scalar(value), ValidationError::FirstNameCharacters)
        }
        FieldName::LastName => validate_name(&scalar(value), ValidationError::LastNameCharacters),
        FieldName::Position => validate_position(&scalar(value)),
        FieldName::Phone => validate_phone(&scalar(value)),
        FieldName::Address => validate_address(&scalar(value)),
        FieldName::Interests => validate_interests(&tags(value)),
        FieldName::Link => match value {
            FieldValue::List(links) => links.iter().find_map(|link| validate_link(link)),
            FieldValue::Text(link) | FieldValue::Choice(link) => validate_link(link),
        },
        FieldName::Avatar => None,
        FieldName::Visibility => validate_visibility(&scalar(value)),
    }
}

/// Validates every field of `record`.
pub fn validate_record(record: &ProfileRecord) -> ErrorMap {
    record
        .entries()
        .into_iter()
        .filter_map(|(field, value)| {
            validate_field(field, &value).map(|error| (ErrorKey::Field(field), error))
        })
        .collect()
}

/// Lists given to a scalar field are checked as their comma-joined text.
fn scalar(value: &FieldValue) -> Cow<'_, str> {
    match value {
        FieldValue::Text(value) | FieldValue::Choice(value) => Cow::Borrowed(value.as_str()),
        FieldValue::List(values) => Cow::Owned(values.join(",")),
    }
}

/// A single text value given to a list field is checked as a one-entry list.
fn tags(value: &FieldValue) -> Cow<'_, [String]> {
    match value {
        FieldValue::List(values) => Cow::Borrowed(values.as_slice()),
        FieldValue::Text(value) | FieldValue::Choice(value) if value.is_empty() => {
            Cow::Owned(vec![])
        }
        FieldValue::Text(value) | FieldValue::Choice(value) => Cow::Owned(vec![value.clone()]),
    }
}

fn char_count(value: &str) -> usize {
    value.chars().count()
}

fn validate_name(value: &str, characters_error: ValidationError) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::Required);
    }
    let len = char_count(value);
    if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&len) {
        return Some(ValidationError::NameLength);
    }
    if !NAME_RE.is_match(value) {
        return Some(characters_error);
    }
    None
}

fn validate_position(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return None;
    }
    if char_count(value) > POSITION_MAX_LENGTH {
        return Some(ValidationError::PositionTooLong);
    }
    if !POSITION_RE.is_match(value) {
        return Some(ValidationError::PositionCharacters);
    }
    None
}

fn validate_phone(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::Required);
    }
    if !PHONE_RE.is_match(value) {
        return Some(ValidationError::PhoneFormat);
    }
    None
}

fn validate_address(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return None;
    }
    if char_count(value) > ADDRESS_MAX_LENGTH {
        return Some(ValidationError::AddressTooLong);
    }
    if !ADDRESS_RE.is_match(value) {
        return Some(ValidationError::AddressCharacters);
    }
    None
}

fn validate_interests(tags: &[String]) -> Option<ValidationError> {
    if tags.len() > MAX_TAGS {
        return Some(ValidationError::TooManyTags);
    }
    if tags.iter().any(|tag| char_count(tag) > TAG_MAX_LENGTH) {
        return Some(ValidationError::TagTooLong);
    }
    if tags.iter().any(|tag| !TAG_RE.is_match(tag)) {
        return Some(ValidationError::TagCharacters);
    }
    None
}

fn validate_link(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return None;
    }
    if char_count(value) > LINK_MAX_LENGTH {
        return Some(ValidationError::LinkTooLong);
    }
    if !LINK_RE.is_match(value) {
        return Some(ValidationError::InvalidUrl);
    }
    None
}

fn validate_visibility(value: &str) -> Option<ValidationError> {
    match value {
        "Public" | "Private" => None,
        _ => Some(ValidationError::InvalidVisibility),
    }
}
