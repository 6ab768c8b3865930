//! Win resource model and partial-update merge policy.
//!
//! A win is an owned record with a required `title` and `text`. Both fields
//! stay non-empty for the life of the record: creation rejects empty values
//! and [`Win::merge`] treats an empty string in a patch as "leave unchanged"
//! rather than "clear".

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Validation errors raised while building a [`Win`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WinValidationError {
    #[error("win id must be a valid UUID")]
    InvalidId,
    #[error("title is required")]
    MissingTitle,
    #[error("text is required")]
    MissingText,
}

impl WinValidationError {
    /// Name of the offending field as sent by clients.
    pub fn field(self) -> &'static str {
        match self {
            Self::InvalidId => "id",
            Self::MissingTitle => "title",
            Self::MissingText => "text",
        }
    }
}

/// Stable win identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WinId(Uuid);

impl WinId {
    /// Parse an identifier from a path segment or stored value.
    ///
    /// # Examples
    /// ```
    /// use wins::domain::WinId;
    ///
    /// assert!(WinId::new("00000000-0000-0000-0000-000000000501").is_ok());
    /// assert!(WinId::new("507f1f77bcf86cd799439011").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, WinValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(WinValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| WinValidationError::InvalidId)
    }

    /// Generate a new random [`WinId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an already-parsed UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for WinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<WinId> for String {
    fn from(value: WinId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for WinId {
    type Error = WinValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unvalidated `title`/`text` pair as supplied by a client.
///
/// Used for creation, where both fields are mandatory. Any owner a client
/// tries to supply is not representable here and therefore ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinDraftFields {
    pub title: Option<String>,
    pub text: Option<String>,
}

/// Sparse set of proposed field changes for an existing win.
///
/// `None` and `Some("")` are both no-ops for a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinPatch {
    pub title: Option<String>,
    pub text: Option<String>,
}

/// Input bundle for [`Win::new`].
#[derive(Debug, Clone)]
pub struct WinDraft {
    pub id: WinId,
    pub title: String,
    pub text: String,
    pub owner: UserId,
}

/// Owned win record.
///
/// ## Invariants
/// - `title` and `text` are non-empty.
/// - `owner` is fixed at construction; no method reassigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Win {
    id: WinId,
    title: String,
    text: String,
    owner: UserId,
}

impl Win {
    /// Validate a draft into a win.
    pub fn new(draft: WinDraft) -> Result<Self, WinValidationError> {
        let WinDraft {
            id,
            title,
            text,
            owner,
        } = draft;
        if title.is_empty() {
            return Err(WinValidationError::MissingTitle);
        }
        if text.is_empty() {
            return Err(WinValidationError::MissingText);
        }
        Ok(Self {
            id,
            title,
            text,
            owner,
        })
    }

    /// Build a new win for `owner` from client-supplied fields.
    ///
    /// Title is checked before text, so a draft missing both reports the
    /// title.
    pub fn create(
        id: WinId,
        owner: UserId,
        fields: WinDraftFields,
    ) -> Result<Self, WinValidationError> {
        let WinDraftFields { title, text } = fields;
        let title = title
            .filter(|value| !value.is_empty())
            .ok_or(WinValidationError::MissingTitle)?;
        let text = text
            .filter(|value| !value.is_empty())
            .ok_or(WinValidationError::MissingText)?;
        Self::new(WinDraft {
            id,
            title,
            text,
            owner,
        })
    }

    /// Apply a partial update.
    ///
    /// A field is replaced only when the patch supplies a non-empty string.
    /// Omitted and empty fields keep their current value, so merging an
    /// empty patch returns the win unchanged.
    ///
    /// # Examples
    /// ```
    /// use wins::domain::{UserId, Win, WinDraft, WinId, WinPatch};
    ///
    /// let win = Win::new(WinDraft {
    ///     id: WinId::random(),
    ///     title: "A".into(),
    ///     text: "B".into(),
    ///     owner: UserId::random(),
    /// })
    /// .expect("valid win");
    ///
    /// let merged = win.clone().merge(WinPatch {
    ///     title: None,
    ///     text: Some(String::new()),
    /// });
    /// assert_eq!(merged, win);
    /// ```
    #[must_use]
    pub fn merge(mut self, patch: WinPatch) -> Self {
        let WinPatch { title, text } = patch;
        if let Some(title) = title.filter(|value| !value.is_empty()) {
            self.title = title;
        }
        if let Some(text) = text.filter(|value| !value.is_empty()) {
            self.text = text;
        }
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &WinId {
        &self.id
    }

    /// Headline of the win.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Body of the win.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Identity of the owning user.
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Whether `identity` owns this win.
    pub fn is_owned_by(&self, identity: &UserId) -> bool {
        self.owner == *identity
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for construction and merge semantics.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn win() -> Win {
        Win::new(WinDraft {
            id: WinId::random(),
            title: "A".to_owned(),
            text: "B".to_owned(),
            owner: UserId::random(),
        })
        .expect("fixture win is valid")
    }

    fn patch(title: Option<&str>, text: Option<&str>) -> WinPatch {
        WinPatch {
            title: title.map(str::to_owned),
            text: text.map(str::to_owned),
        }
    }

    #[rstest]
    fn empty_patch_is_a_no_op(win: Win) {
        assert_eq!(win.clone().merge(WinPatch::default()), win);
    }

    #[rstest]
    #[case(patch(None, Some("")))]
    #[case(patch(Some(""), None))]
    #[case(patch(Some(""), Some("")))]
    fn empty_strings_do_not_overwrite(win: Win, #[case] patch: WinPatch) {
        let merged = win.clone().merge(patch);
        assert_eq!(merged.title(), "A");
        assert_eq!(merged.text(), "B");
    }

    #[rstest]
    #[case(patch(Some("New"), None), "New", "B")]
    #[case(patch(None, Some("Body")), "A", "Body")]
    #[case(patch(Some("New"), Some("Body")), "New", "Body")]
    #[case(patch(Some("New"), Some("")), "New", "B")]
    #[case(patch(Some(" "), None), " ", "B")]
    fn non_empty_values_replace(
        win: Win,
        #[case] patch: WinPatch,
        #[case] title: &str,
        #[case] text: &str,
    ) {
        let merged = win.merge(patch);
        assert_eq!(merged.title(), title);
        assert_eq!(merged.text(), text);
    }

    #[rstest]
    fn merge_keeps_identity_and_owner(win: Win) {
        let merged = win.clone().merge(patch(Some("New"), Some("Body")));
        assert_eq!(merged.id(), win.id());
        assert_eq!(merged.owner(), win.owner());
    }

    #[rstest]
    #[case(None, Some("text"), WinValidationError::MissingTitle)]
    #[case(Some(""), Some("text"), WinValidationError::MissingTitle)]
    #[case(Some("title"), None, WinValidationError::MissingText)]
    #[case(Some("title"), Some(""), WinValidationError::MissingText)]
    #[case(None, None, WinValidationError::MissingTitle)]
    fn create_requires_non_empty_fields(
        #[case] title: Option<&str>,
        #[case] text: Option<&str>,
        #[case] expected: WinValidationError,
    ) {
        let fields = WinDraftFields {
            title: title.map(str::to_owned),
            text: text.map(str::to_owned),
        };
        let result = Win::create(WinId::random(), UserId::random(), fields);
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    fn create_assigns_owner() {
        let owner = UserId::random();
        let fields = WinDraftFields {
            title: Some("title".to_owned()),
            text: Some("text".to_owned()),
        };
        let win = Win::create(WinId::random(), owner, fields).expect("valid fields");
        assert!(win.is_owned_by(&owner));
        assert!(!win.is_owned_by(&UserId::random()));
    }

    #[rstest]
    #[case("")]
    #[case("not-a-uuid")]
    #[case(" 00000000-0000-0000-0000-000000000501")]
    fn win_id_rejects_invalid_input(#[case] raw: &str) {
        assert_eq!(WinId::new(raw), Err(WinValidationError::InvalidId));
    }
}
