// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum::IntoEnumIterator;

use super::{FieldName, FieldValue, Visibility};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub phone: String,
    pub address: String,
    pub interests: Vec<String>,
    pub links: Vec<String>,
    /// A `data:` URI or an empty string.
    pub avatar: String,
    /// The raw chosen visibility. Use [`ProfileRecord::visibility`] to read it as an enum.
    pub visibility: String,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        ProfileRecord {
            first_name: String::new(),
            last_name: String::new(),
            position: String::new(),
            phone: String::new(),
            address: String::new(),
            interests: vec![],
            links: vec![],
            avatar: String::new(),
            visibility: Visibility::default().to_string(),
        }
    }
}

impl ProfileRecord {
    pub fn visibility(&self) -> Visibility {
        Visibility::parse_or_default(&self.visibility)
    }

    pub fn value(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::FirstName => FieldValue::Text(self.first_name.clone()),
            FieldName::LastName => FieldValue::Text(self.last_name.clone()),
            FieldName::Position => FieldValue::Text(self.position.clone()),
            FieldName::Phone => FieldValue::Text(self.phone.clone()),
            FieldName::Address => FieldValue::Text(self.address.clone()),
            FieldName::Interests => FieldValue::List(self.interests.clone()),
            FieldName::Link => FieldValue::List(self.links.clone()),
            FieldName::Avatar => FieldValue::Text(self.avatar.clone()),
            FieldName::Visibility => FieldValue::Choice(self.visibility.clone()),
        }
    }

    /// All fields in display order.
    pub fn entries(&self) -> Vec<(FieldName, FieldValue)> {
        FieldName::iter()
            .map(|field| (field, self.value(field)))
            .collect()
    }

    /// Returns the text slot of a text field, `None` for list and choice fields.
    pub(crate) fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FirstName => Some(&mut self.first_name),
            FieldName::LastName => Some(&mut self.last_name),
            FieldName::Position => Some(&mut self.position),
            FieldName::Phone => Some(&mut self.phone),
            FieldName::Address => Some(&mut self.address),
            FieldName::Avatar => Some(&mut self.avatar),
            FieldName::Interests | FieldName::Link | FieldName::Visibility => None,
        }
    }

    /// Replaces the value of `field`. Returns `false` if `value` has the wrong shape for the
    /// field, in which case nothing is changed.
    pub fn set_value(&mut self, field: FieldName, value: FieldValue) -> bool {
        match (field, value) {
            (FieldName::Interests, FieldValue::List(values)) => self.interests = values,
            (FieldName::Link, FieldValue::List(values)) => self.links = values,
            (FieldName::Visibility, FieldValue::Choice(value)) => self.visibility = value,
            (field, FieldValue::Text(value)) => {
                let Some(slot) = self.text_mut(field) else {
                    return false;
                };
                *slot = value;
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_record() {
        let record = ProfileRecord::default();
        let entries = record.entries();

        assert_eq!(entries.len(), 9);
        assert_eq!(
            entries[5],
            (FieldName::Interests, FieldValue::List(vec![]))
        );
        assert_eq!(
            entries[8],
            (FieldName::Visibility, FieldValue::Choice("Private".to_string()))
        );
        assert_eq!(record.visibility(), Visibility::Private);
    }

    #[test]
    fn test_set_value_rejects_wrong_shape() {
        let mut record = ProfileRecord::default();

        assert!(record.set_value(FieldName::Phone, "+79999999999".into()));
        assert!(!record.set_value(FieldName::Interests, "music".into()));
        assert!(!record.set_value(FieldName::Phone, FieldValue::List(vec![])));
        assert!(record.set_value(
            FieldName::Link,
            FieldValue::List(vec!["https://example.com".to_string()])
        ));

        assert_eq!(record.phone, "+79999999999");
        assert!(record.interests.is_empty());
        assert_eq!(record.links, vec!["https://example.com".to_string()]);
    }

    #[test]
    fn test_invalid_visibility_reads_as_private() {
        let record = ProfileRecord {
            visibility: "Friends".to_string(),
            ..Default::default()
        };
        assert_eq!(record.visibility(), Visibility::Private);
    }
}
