//! Working drafts for the list editors.
//!
//! An editor page is one HTML form holding every entry of one list. Each
//! post carries the whole draft back, plus an `action`:
//!
//! - `save` - commit the draft to the content store
//! - `add` - insert a placeholder entry, not committed
//! - `remove:<id>` - drop an entry, not committed
//!
//! Entries are posted in order as repeated field groups, each opened by its
//! `id` field, so the draft round-trips without indexes in field names.

use std::collections::HashMap;

use folio_core::types::id::IdGenerator;
use folio_core::{AdminSection, Snapshot, SnapshotPatch};

use crate::error::{AppError, add_breadcrumb};
use crate::state::AppState;

/// Raw form fields in posted order.
pub type PostedFields = Vec<(String, String)>;

/// Fields of one posted entry, keyed by name.
pub type FieldMap = HashMap<String, String>;

/// What the admin asked an editor to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    Save,
    Add,
    Remove(String),
}

impl EditorAction {
    /// Parse the `action` field.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "save" => Some(Self::Save),
            "add" => Some(Self::Add),
            other => other
                .strip_prefix("remove:")
                .map(|id| Self::Remove(id.to_string())),
        }
    }
}

/// A posted draft: the requested action and the entry field groups.
#[derive(Debug, Default)]
pub struct PostedDraft {
    pub action: Option<EditorAction>,
    pub entries: Vec<FieldMap>,
}

impl PostedDraft {
    /// Group posted fields into entries.
    ///
    /// Fields before the first `id` belong to no entry and are ignored.
    #[must_use]
    pub fn parse(fields: PostedFields) -> Self {
        let mut draft = Self::default();
        for (name, value) in fields {
            match name.as_str() {
                "action" => draft.action = EditorAction::parse(&value),
                "id" => {
                    let mut entry = FieldMap::new();
                    entry.insert(name, value);
                    draft.entries.push(entry);
                }
                _ => {
                    if let Some(entry) = draft.entries.last_mut() {
                        entry.insert(name, value);
                    }
                }
            }
        }
        draft
    }
}

/// Editable form of one list entry.
///
/// Rows hold text exactly as typed; conversion to the stored entity happens
/// only on save, so an invalid value can be shown back for correction.
pub trait DraftRow: Sized {
    /// Stored entity.
    type Item: Clone;

    /// Section this editor lives in.
    const SECTION: AdminSection;

    /// Whether new entries go to the top of the list.
    const PREPEND: bool;

    fn id(&self) -> &str;

    fn from_item(item: &Self::Item) -> Self;

    /// Row read from a posted entry. Missing fields are empty.
    fn from_fields(fields: &FieldMap) -> Self;

    /// A new placeholder entry with the given id.
    fn placeholder(id: String) -> Self;

    /// Convert back to the stored entity.
    ///
    /// # Errors
    ///
    /// Returns a message for the admin if a field is invalid.
    fn to_item(&self) -> Result<Self::Item, String>;

    /// This editor's slice of the snapshot.
    fn slice(snapshot: &Snapshot) -> &[Self::Item];

    /// Patch replacing this editor's slice.
    fn patch(items: Vec<Self::Item>) -> SnapshotPatch;
}

/// Read a field, empty when absent.
#[must_use]
pub fn field(fields: &FieldMap, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

/// State of a list editor after handling a request.
#[derive(Debug)]
pub struct Editor<R> {
    pub rows: Vec<R>,
    /// Confirmation after a save, empty otherwise.
    pub flash: String,
    /// Validation error, empty otherwise.
    pub error: String,
}

impl<R: DraftRow> Editor<R> {
    /// Editor showing the committed slice.
    #[must_use]
    pub fn load(snapshot: &Snapshot) -> Self {
        Self {
            rows: R::slice(snapshot).iter().map(R::from_item).collect(),
            flash: String::new(),
            error: String::new(),
        }
    }

    /// Editor showing a posted draft, before any action.
    #[must_use]
    pub fn from_draft(entries: &[FieldMap]) -> Self {
        Self {
            rows: entries.iter().map(R::from_fields).collect(),
            flash: String::new(),
            error: String::new(),
        }
    }

    /// Insert a placeholder with an id unused in this draft.
    pub fn add(&mut self) {
        let id = loop {
            let id = IdGenerator::global().next_id();
            if !self.rows.iter().any(|row| row.id() == id) {
                break id;
            }
        };

        let row = R::placeholder(id);
        if R::PREPEND {
            self.rows.insert(0, row);
        } else {
            self.rows.push(row);
        }
    }

    /// Drop the entry with `id` from the draft.
    pub fn remove(&mut self, id: &str) {
        let before = self.rows.len();
        self.rows.retain(|row| row.id() != id);
        if self.rows.len() == before {
            tracing::warn!(
                section = %R::SECTION,
                id,
                "Remove requested for an id not in the draft"
            );
        }
    }

    /// Convert every row, stopping at the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns the first row's validation message.
    pub fn items(&self) -> Result<Vec<R::Item>, String> {
        self.rows.iter().map(R::to_item).collect()
    }

    /// Handle a posted draft against the shared content store.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is missing or a save cannot be
    /// persisted. Validation failures are reported in [`Editor::error`].
    pub async fn handle(state: &AppState, fields: PostedFields) -> Result<Self, AppError> {
        let posted = PostedDraft::parse(fields);
        let action = posted
            .action
            .ok_or_else(|| AppError::BadRequest("missing or unknown editor action".to_string()))?;

        let mut editor = Self::from_draft(&posted.entries);
        match action {
            EditorAction::Add => editor.add(),
            EditorAction::Remove(id) => editor.remove(&id),
            EditorAction::Save => match editor.items() {
                Ok(items) => {
                    let count = items.len();
                    state.content_mut().await.update_data(R::patch(items)).await?;
                    tracing::info!(section = %R::SECTION, count, "Editor saved");
                    add_breadcrumb("admin", R::SECTION.saved_message());
                    editor.flash = R::SECTION.saved_message().to_string();
                }
                Err(message) => {
                    tracing::info!(section = %R::SECTION, %message, "Editor save rejected");
                    editor.error = message;
                }
            },
        }

        Ok(editor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn posted(pairs: &[(&str, &str)]) -> PostedFields {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(EditorAction::parse("save"), Some(EditorAction::Save));
        assert_eq!(EditorAction::parse("add"), Some(EditorAction::Add));
        assert_eq!(
            EditorAction::parse("remove:p1"),
            Some(EditorAction::Remove("p1".to_string()))
        );
        assert_eq!(EditorAction::parse("publish"), None);
    }

    #[test]
    fn test_parse_groups_entries_by_id() {
        let draft = PostedDraft::parse(posted(&[
            ("stray", "ignored"),
            ("id", "a"),
            ("title", "First"),
            ("id", "b"),
            ("title", "Second"),
            ("action", "save"),
        ]));

        assert_eq!(draft.action, Some(EditorAction::Save));
        assert_eq!(draft.entries.len(), 2);
        assert_eq!(field(&draft.entries[0], "title"), "First");
        assert_eq!(field(&draft.entries[1], "id"), "b");
        assert_eq!(field(&draft.entries[1], "stray"), "");
    }

    #[test]
    fn test_parse_empty_draft() {
        let draft = PostedDraft::parse(posted(&[("action", "add")]));
        assert_eq!(draft.action, Some(EditorAction::Add));
        assert!(draft.entries.is_empty());
    }
}
