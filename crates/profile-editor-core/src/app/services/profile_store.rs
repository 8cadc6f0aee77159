// profile-editor/profile-editor-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, error, info, warn};

use crate::app::deps::{AppConfig, DynProfileSnapshotRepository};
use crate::domain::profile::models::{
    AvatarImage, AvatarPolicy, FieldName, FieldValue, ProfileRecord,
};
use crate::domain::validation::{validate_field, validate_record, ErrorKey, ErrorMap};
use crate::profile_store_builder::{ProfileStoreBuilder, UndefinedRepository};

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("The profile contains invalid fields. {0}")]
    Validation(ErrorMap),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, Default)]
struct EditorState {
    is_editing: bool,
    is_interest_input_open: bool,
    interest_draft: String,
    is_link_input_open: bool,
    link_draft: String,
}

/// Owns the profile being edited along with its inline errors and persists it as a whole.
pub struct ProfileStore {
    record: ProfileRecord,
    errors: ErrorMap,
    editor: EditorState,
    avatar_policy: AvatarPolicy,
    snapshot_repo: DynProfileSnapshotRepository,
}

impl ProfileStore {
    pub fn builder() -> ProfileStoreBuilder<UndefinedRepository> {
        ProfileStoreBuilder::new()
    }

    pub(crate) fn new(snapshot_repo: DynProfileSnapshotRepository, config: AppConfig) -> Self {
        ProfileStore {
            record: ProfileRecord::default(),
            errors: ErrorMap::default(),
            editor: EditorState::default(),
            avatar_policy: config.avatar_policy,
            snapshot_repo,
        }
    }
}

impl ProfileStore {
    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_editing
    }

    pub fn begin_editing(&mut self) {
        self.editor.is_editing = true;
    }

    pub fn is_interest_input_open(&self) -> bool {
        self.editor.is_interest_input_open
    }

    pub fn interest_draft(&self) -> &str {
        &self.editor.interest_draft
    }

    pub fn is_link_input_open(&self) -> bool {
        self.editor.is_link_input_open
    }

    /// The in-progress link, already prefixed with `https://` where needed.
    pub fn link_draft(&self) -> &str {
        &self.editor.link_draft
    }

    pub fn toggle_interest_input(&mut self) {
        self.editor.is_interest_input_open = !self.editor.is_interest_input_open;
        self.editor.interest_draft.clear();
    }

    pub fn toggle_link_input(&mut self) {
        self.editor.is_link_input_open = !self.editor.is_link_input_open;
        self.editor.link_draft.clear();
    }
}

impl ProfileStore {
    /// Replaces the record with the saved snapshot, or with the default record if there is no
    /// usable snapshot.
    pub fn load(&mut self) {
        self.record = match self.snapshot_repo.get() {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("No saved profile found. Starting with an empty profile.");
                ProfileRecord::default()
            }
            Err(err) => {
                warn!("Ignoring unusable profile snapshot. {}", err);
                ProfileRecord::default()
            }
        };
        self.errors.clear();
    }

    /// Applies a change typed into the input of `field` and updates the field's inline error.
    ///
    /// Input for `Link` and `Interests` goes into the respective draft rather than into the
    /// record. Drafts are added with [`ProfileStore::add_link`] and
    /// [`ProfileStore::add_interest`]. An interest draft is checked as a single tag.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        debug!("Updating field '{}'.", field);

        let error = validate_field(field, &FieldValue::Text(value.clone()));

        match field {
            FieldName::Interests => self.editor.interest_draft = value,
            FieldName::Link => self.editor.link_draft = normalize_link_input(value),
            FieldName::Visibility => self.record.visibility = value,
            field => {
                if let Some(slot) = self.record.text_mut(field) {
                    *slot = value;
                }
            }
        }

        self.errors.set(field, error);
    }

    pub fn add_interest(&mut self, text: &str) {
        let interest = text.trim();
        if interest.is_empty() {
            return;
        }

        self.record.interests.push(interest.to_string());
        self.editor.is_interest_input_open = false;
        self.editor.interest_draft.clear();
    }

    /// Removes every interest equal to `text`.
    pub fn remove_interest(&mut self, text: &str) {
        self.record.interests.retain(|interest| interest != text);
    }

    pub fn add_link(&mut self, text: &str) {
        let link = text.trim();
        if link.is_empty() {
            return;
        }

        if let Some(error) = validate_field(FieldName::Link, &FieldValue::from(link)) {
            debug!("Rejecting link. {}", error);
            self.errors.insert(ErrorKey::NewLink, error);
            return;
        }

        self.record.links.push(link.to_string());
        self.errors.remove(ErrorKey::NewLink);
        self.editor.is_link_input_open = false;
        self.editor.link_draft.clear();
    }

    /// Removes every link equal to `text`.
    pub fn remove_link(&mut self, text: &str) {
        self.record.links.retain(|link| link != text);
    }

    /// Inlines the selected image file as the avatar. An empty selection is ignored.
    pub fn set_avatar(&mut self, image_data: impl AsRef<[u8]>) {
        let image = AvatarImage::from_bytes(image_data.as_ref().to_vec());
        if image.is_empty() {
            return;
        }
        self.set_avatar_image(image);
    }

    /// Stores an image that was decoded elsewhere. When several decodes race, the last one
    /// handed in wins.
    pub fn set_avatar_image(&mut self, image: AvatarImage) {
        if let Err(error) = self.avatar_policy.check(&image) {
            debug!("Rejecting avatar. {}", error);
            self.errors.insert(FieldName::Avatar, error);
            return;
        }

        debug!("Setting avatar ({}, {} bytes).", image.mime_type, image.len());
        self.record.avatar = image.data_uri();
        self.errors.remove(FieldName::Avatar);
    }

    /// Stores `value` as is. Invalid values are reported by [`ProfileStore::save`].
    pub fn set_visibility(&mut self, value: impl Into<String>) {
        self.record.visibility = value.into();
    }

    /// Validates the whole record and, if every field is valid, overwrites the saved snapshot.
    pub fn save(&mut self) -> Result<(), SaveError> {
        let errors = validate_record(&self.record);

        if !errors.is_empty() {
            warn!("Not saving profile. {}", errors);
            self.errors = errors.clone();
            return Err(SaveError::Validation(errors));
        }

        self.snapshot_repo.set(&self.record)?;

        self.errors.clear();
        self.editor.is_editing = false;
        info!("Profile saved.");

        Ok(())
    }

    /// Deletes the saved snapshot and resets the record to its defaults. The in-memory reset
    /// happens even if the snapshot couldn't be deleted.
    pub fn cancel(&mut self) -> anyhow::Result<()> {
        let result = self.snapshot_repo.delete();

        self.record = ProfileRecord::default();
        self.errors.clear();
        self.editor = EditorState::default();

        match &result {
            Ok(()) => info!("Profile discarded."),
            Err(err) => error!("Failed to delete saved profile. {}", err),
        }

        result
    }
}

/// Prefixes typed links with `https://` unless they already start with `http`.
fn normalize_link_input(value: String) -> String {
    if value.is_empty() || value.starts_with("http") {
        return value;
    }
    format!("https://{}", value)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::anyhow;
    use mockall::predicate;
    use pretty_assertions::assert_eq;

    use crate::domain::profile::repos::MockProfileSnapshotRepository;
    use crate::domain::validation::ValidationError;

    use super::*;

    fn valid_record() -> ProfileRecord {
        ProfileRecord {
            first_name: "Anna-Maria".to_string(),
            last_name: "Ivanova".to_string(),
            phone: "+79999999999".to_string(),
            ..Default::default()
        }
    }

    fn store_with(repo: MockProfileSnapshotRepository) -> ProfileStore {
        ProfileStore::new(Arc::new(repo), AppConfig::default())
    }

    #[test]
    fn test_normalize_link_input() {
        assert_eq!(normalize_link_input("".to_string()), "");
        assert_eq!(
            normalize_link_input("example.com".to_string()),
            "https://example.com"
        );
        assert_eq!(
            normalize_link_input("http://example.com".to_string()),
            "http://example.com"
        );
        assert_eq!(normalize_link_input("https".to_string()), "https");
    }

    #[test]
    fn test_load_falls_back_to_defaults_on_error() {
        let mut repo = MockProfileSnapshotRepository::new();
        repo.expect_get()
            .once()
            .returning(|| Err(anyhow!("Snapshot is not a list of profile fields")));

        let mut store = store_with(repo);
        store.record.first_name = "Anna".to_string();
        store.load();

        assert_eq!(store.record(), &ProfileRecord::default());
    }

    #[test]
    fn test_save_with_invalid_fields_does_not_touch_storage() {
        let mut repo = MockProfileSnapshotRepository::new();
        repo.expect_set().never();

        let mut store = store_with(repo);
        let Err(SaveError::Validation(errors)) = store.save() else {
            panic!("Expected validation error");
        };

        assert_eq!(errors.field(FieldName::FirstName), Some(ValidationError::Required));
        assert_eq!(store.errors(), &errors);
    }

    #[test]
    fn test_storage_failure_keeps_record_and_errors() {
        let mut repo = MockProfileSnapshotRepository::new();
        repo.expect_set()
            .once()
            .with(predicate::eq(valid_record()))
            .returning(|_| Err(anyhow!("disk full")));

        let mut store = store_with(repo);
        store.record = valid_record();
        store.begin_editing();
        store.errors.insert(ErrorKey::NewLink, ValidationError::InvalidUrl);

        assert!(matches!(store.save(), Err(SaveError::Storage(_))));
        assert_eq!(store.record(), &valid_record());
        assert_eq!(store.errors().new_link(), Some(ValidationError::InvalidUrl));
        assert!(store.is_editing());
    }

    #[test]
    fn test_cancel_resets_even_if_delete_fails() {
        let mut repo = MockProfileSnapshotRepository::new();
        repo.expect_delete()
            .once()
            .returning(|| Err(anyhow!("read-only database")));

        let mut store = store_with(repo);
        store.record = valid_record();
        store.toggle_link_input();
        store.set_field(FieldName::Phone, "1");

        assert!(store.cancel().is_err());
        assert_eq!(store.record(), &ProfileRecord::default());
        assert!(store.errors().is_empty());
        assert!(!store.is_link_input_open());
    }

    #[test]
    fn test_successful_save_clears_errors_and_leaves_editing_mode() {
        let mut repo = MockProfileSnapshotRepository::new();
        repo.expect_set()
            .once()
            .with(predicate::eq(valid_record()))
            .returning(|_| Ok(()));

        let mut store = store_with(repo);
        store.record = valid_record();
        store.begin_editing();
        store.errors.insert(ErrorKey::NewLink, ValidationError::InvalidUrl);

        store.save().unwrap();

        assert!(store.errors().is_empty());
        assert!(!store.is_editing());
    }
}
