//! Ordered collection of panel entries and the four window indices.
//!
//! The registry owns the entries (insertion order is the "natural" order)
//! plus the indices that frame the panel: `top` and `bottom` delimit the
//! visible window, `open` tracks the application's open folder, and
//! `highlighted` is the navigator cursor. Every structural mutation repairs
//! all four indices in the same call, so observers never see one of them
//! pointing past the end or at a removed entry.

use tracing::debug;

use crate::panel::entry::{Entry, EntryId};
use crate::store::FolderId;

/// Entry storage plus viewport/cursor indices.
///
/// Each index is either unset or a valid position into `entries`. Indices
/// are positional and therefore invalidated by sorting; [`position_of`]
/// re-anchors an [`EntryId`] after a reorder.
///
/// [`position_of`]: Registry::position_of
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub(crate) entries: Vec<Entry>,
    pub(crate) top: Option<usize>,
    pub(crate) open: Option<usize>,
    pub(crate) highlighted: Option<usize>,
    pub(crate) bottom: Option<usize>,
    next_entry: u64,
}

impl Registry {
    /// Creates an empty registry with all indices unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries in their current order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no folders are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First position of the visible window, if set.
    #[must_use]
    pub fn top(&self) -> Option<usize> {
        self.top
    }

    /// Position of the entry for the open folder, if set.
    #[must_use]
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    /// Position of the cursor, if set.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Last position of the visible window, if set.
    #[must_use]
    pub fn bottom(&self) -> Option<usize> {
        self.bottom
    }

    /// The entry under the cursor, if the cursor is set and in range.
    #[must_use]
    pub fn highlighted_entry(&self) -> Option<&Entry> {
        self.highlighted.and_then(|i| self.entries.get(i))
    }

    /// The entry for the open folder, if tracked.
    #[must_use]
    pub fn open_entry(&self) -> Option<&Entry> {
        self.open.and_then(|i| self.entries.get(i))
    }

    /// Current position of the entry with the given handle.
    #[must_use]
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    /// Appends an entry for `folder`.
    ///
    /// Initialises `top` and `bottom` to the new position when they are
    /// unset, and `open` when the folder matches the supplied open-folder
    /// identity and no entry is tracked as open yet.
    pub fn insert(&mut self, folder: FolderId, open_folder: Option<FolderId>) -> EntryId {
        let id = EntryId(self.next_entry);
        self.next_entry += 1;

        let pos = self.entries.len();
        self.entries.push(Entry::new(id, folder));

        if self.top.is_none() {
            self.top = Some(pos);
        }
        if self.bottom.is_none() {
            self.bottom = Some(pos);
        }
        if self.open.is_none() && open_folder == Some(folder) {
            self.open = Some(pos);
        }

        debug!(folder = folder.raw(), position = pos, "panel entry added");
        id
    }

    /// Removes the entry for `folder`, repairing all four indices.
    ///
    /// Returns `false` (and changes nothing) when the folder is not listed,
    /// so duplicate deletion notifications are harmless. Indices past the
    /// removed position shift left with the entries; an index that would
    /// fall off the new end is clamped to the last entry, or unset when the
    /// registry becomes empty. `open` pointing at the removed entry becomes
    /// unset rather than drifting to a neighbour.
    pub fn remove(&mut self, folder: FolderId) -> bool {
        let Some(removed) = self.entries.iter().position(|e| e.folder() == folder) else {
            return false;
        };
        self.entries.remove(removed);
        let len = self.entries.len();

        self.top = shift_after_removal(self.top, removed, len);
        self.open = match self.open {
            Some(i) if i == removed => None,
            Some(i) if i > removed => Some(i - 1),
            other => other,
        };
        self.highlighted = shift_after_removal(self.highlighted, removed, len);
        self.bottom = shift_after_removal(self.bottom, removed, len);

        debug!(folder = folder.raw(), position = removed, "panel entry removed");
        true
    }

    pub(crate) fn set_label(&mut self, id: EntryId, label: String) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                entry.set_label(label);
                true
            }
            None => false,
        }
    }
}

/// Index adjustment for `top`, `highlighted`, and `bottom` after removing
/// the entry at `removed`, with `len` entries left.
fn shift_after_removal(index: Option<usize>, removed: usize, len: usize) -> Option<usize> {
    match index {
        Some(i) if i > removed || i == len => i.checked_sub(1),
        other => other,
    }
}
