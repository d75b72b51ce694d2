//! Sorting of panel entries.
//!
//! Entries are compared through the [`MailStore`], never through cached
//! labels. Sorting only reorders — set membership and hidden flags are left
//! alone. Positional indices are invalidated by any reorder, so callers
//! re-anchor `open`/`highlighted` by [`EntryId`](crate::panel::entry::EntryId)
//! afterwards.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::panel::entry::Entry;
use crate::panel::registry::Registry;
use crate::store::{FolderId, MailStore};

/// The field by which entries are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Total message count, highest first.
    Count,
    /// Unread message count, highest first.
    Unread,
    /// Flagged message count, highest first.
    Flagged,
    /// Lexicographic by description, falling back to the path.
    Description,
    /// Folder-hierarchy-aware path order; an inbox sorts before its siblings.
    Path,
    /// The application's own folder order; no comparator.
    #[default]
    Natural,
}

/// Sort key plus direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to sort by.
    #[serde(default)]
    pub key: SortKey,
    /// Reverse the key's primary sense.
    #[serde(default)]
    pub reversed: bool,
}

impl SortSpec {
    /// Builds a forward spec for `key`.
    #[must_use]
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            reversed: false,
        }
    }

    /// Returns this spec with the direction flipped.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self
        }
    }
}

/// Reorders the registry for `spec`.
///
/// Non-natural keys sort on every call (the underlying counts may have
/// changed); the sort is stable, so sorting twice by the same key cannot
/// drift. The natural key restores the store's folder order instead, and
/// only when the spec just changed — order is already natural otherwise.
pub fn sort_entries(
    registry: &mut Registry,
    store: &dyn MailStore,
    spec: SortSpec,
    previous: SortSpec,
) {
    if spec.key == SortKey::Natural {
        if spec != previous {
            restore_natural_order(registry, store);
        }
        return;
    }

    registry.entries.sort_by(|a, b| {
        let ord = compare(a, b, store, spec.key);
        if spec.reversed {
            ord.reverse()
        } else {
            ord
        }
    });
}

fn compare(a: &Entry, b: &Entry, store: &dyn MailStore, key: SortKey) -> Ordering {
    let (fa, fb) = (a.folder(), b.folder());
    match key {
        SortKey::Count => by_count(store.counts(fa).total, store.counts(fb).total, store, fa, fb),
        SortKey::Unread => by_count(
            store.counts(fa).unread,
            store.counts(fb).unread,
            store,
            fa,
            fb,
        ),
        SortKey::Flagged => by_count(
            store.counts(fa).flagged,
            store.counts(fb).flagged,
            store,
            fa,
            fb,
        ),
        SortKey::Description => desc_or_path(store, fa).cmp(desc_or_path(store, fb)),
        SortKey::Path => {
            inbox_cmp(store.path(fa), store.path(fb)).then_with(|| store.path(fa).cmp(store.path(fb)))
        }
        SortKey::Natural => Ordering::Equal,
    }
}

/// Higher count first, path as tie-break.
fn by_count(a: i64, b: i64, store: &dyn MailStore, fa: FolderId, fb: FolderId) -> Ordering {
    b.cmp(&a).then_with(|| store.path(fa).cmp(store.path(fb)))
}

fn desc_or_path(store: &dyn MailStore, folder: FolderId) -> &str {
    store.description(folder).unwrap_or_else(|| store.path(folder))
}

/// Orders a folder named `inbox` before its siblings.
///
/// Only applies when both paths sit in the same parent directory (compared
/// case-insensitively); everything else is left for the plain path
/// tie-break.
pub(crate) fn inbox_cmp(a: &str, b: &str) -> Ordering {
    let (Some(a_slash), Some(b_slash)) = (a.rfind('/'), b.rfind('/')) else {
        return Ordering::Equal;
    };

    let split = a_slash.min(b_slash);
    let same_parent = a.as_bytes().get(split) == Some(&b'/')
        && b.as_bytes().get(split) == Some(&b'/')
        && a.len() > split + 1
        && b.len() > split + 1
        && a[..split].eq_ignore_ascii_case(&b[..split]);
    if !same_parent {
        return Ordering::Equal;
    }

    let a_inbox = a[split + 1..].eq_ignore_ascii_case("inbox");
    let b_inbox = b[split + 1..].eq_ignore_ascii_case("inbox");
    match (a_inbox, b_inbox) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Re-projects the entries back into the store's folder order.
///
/// Walks the external order and swaps each matching entry forward into
/// place. Quadratic in the worst case, but bounded by panel size; the
/// contract is only "matches the external order". Folders the panel does
/// not list are skipped; entries the store no longer lists keep their
/// relative position at the end.
pub fn restore_natural_order(registry: &mut Registry, store: &dyn MailStore) {
    let mut placed = 0;
    for folder in store.folder_order() {
        if placed >= registry.entries.len() {
            break;
        }
        let found = (placed..registry.entries.len())
            .find(|&j| registry.entries[j].folder() == folder);
        if let Some(j) = found {
            registry.entries.swap(placed, j);
            placed += 1;
        }
    }
}
