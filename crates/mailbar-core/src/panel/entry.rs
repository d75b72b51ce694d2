//! A single row of the folder panel.

use crate::store::FolderId;

/// Stable, opaque handle to a panel entry.
///
/// Handles are assigned from a per-registry counter and are never reused, so
/// an `EntryId` stays valid across re-sorting and across removal of *other*
/// entries. Positions, by contrast, are invalidated by any reorder — code
/// that needs to survive a sort re-anchors through the `EntryId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) u64);

/// One folder listed in the panel.
///
/// The entry does not own the folder; it carries the folder's identity, a
/// cached display label (built by the external format engine, never used for
/// ordering), and the hidden flag written by the visibility filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    folder: FolderId,
    label: String,
    hidden: bool,
}

impl Entry {
    pub(crate) fn new(id: EntryId, folder: FolderId) -> Self {
        Self {
            id,
            folder,
            label: String::new(),
            hidden: false,
        }
    }

    /// Returns this entry's stable handle.
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Returns the identity of the folder this entry lists.
    #[must_use]
    pub fn folder(&self) -> FolderId {
        self.folder
    }

    /// Returns the cached display label. Empty until the caller sets one.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` when the visibility filter has hidden this entry.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_is_visible_and_unlabelled() {
        let entry = Entry::new(EntryId(0), FolderId::new(7));

        assert!(!entry.is_hidden());
        assert_eq!(entry.label(), "");
        assert_eq!(entry.folder(), FolderId::new(7));
    }

    #[test]
    fn hidden_and_label_round_trip() {
        let mut entry = Entry::new(EntryId(1), FolderId::new(0));

        entry.set_hidden(true);
        entry.set_label("INBOX (3)".to_string());

        assert!(entry.is_hidden());
        assert_eq!(entry.label(), "INBOX (3)");
    }
}
