// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::profile::models::FieldName;

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKey {
    Field(FieldName),
    /// A link that was rejected when adding it to the list of links.
    NewLink,
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => write!(f, "{}", field),
            Self::NewLink => write!(f, "newLink"),
        }
    }
}

impl From<FieldName> for ErrorKey {
    fn from(value: FieldName) -> Self {
        Self::Field(value)
    }
}

/// Inline error messages keyed by the input they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<ErrorKey, ValidationError>,
}

impl ErrorMap {
    pub fn get(&self, key: impl Into<ErrorKey>) -> Option<ValidationError> {
        self.errors.get(&key.into()).copied()
    }

    pub fn field(&self, field: FieldName) -> Option<ValidationError> {
        self.get(field)
    }

    pub fn new_link(&self) -> Option<ValidationError> {
        self.get(ErrorKey::NewLink)
    }

    /// Stores `error` under `key`, or removes the key when `error` is `None`.
    pub fn set(&mut self, key: impl Into<ErrorKey>, error: Option<ValidationError>) {
        let key = key.into();
        match error {
            Some(error) => {
                self.errors.insert(key, error);
            }
            None => {
                self.errors.remove(&key);
            }
        }
    }

    pub fn insert(&mut self, key: impl Into<ErrorKey>, error: ValidationError) {
        self.errors.insert(key.into(), error);
    }

    pub fn remove(&mut self, key: impl Into<ErrorKey>) -> Option<ValidationError> {
        self.errors.remove(&key.into())
    }

    pub fn clear(&mut self) {
        self.errors.clear()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, ValidationError)> + '_ {
        self.errors.iter().map(|(key, error)| (*key, *error))
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, error) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", key, error)?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<(ErrorKey, ValidationError)> for ErrorMap {
    fn from_iter<T: IntoIterator<Item = (ErrorKey, ValidationError)>>(iter: T) -> Self {
        ErrorMap {
            errors: iter.into_iter().collect(),
        }
    }
}
