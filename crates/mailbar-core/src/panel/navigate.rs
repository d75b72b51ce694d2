//! Cursor movement over the entry list.
//!
//! All operations return `false` and leave state untouched when they cannot
//! move: empty registry, unset cursor, or a scan that runs off the end.
//! Moving the cursor never opens a folder; that decision stays with the
//! application.

use crate::panel::entry::Entry;
use crate::panel::registry::Registry;
use crate::store::MailStore;

impl Registry {
    /// Moves the cursor to the next visible entry.
    pub fn select_next(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let Some(mut position) = self.highlighted else {
            return false;
        };

        loop {
            position += 1;
            if position == self.entries.len() {
                return false;
            }
            if !self.entries[position].is_hidden() {
                break;
            }
        }

        self.highlighted = Some(position);
        true
    }

    /// Moves the cursor to the previous visible entry.
    pub fn select_prev(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let Some(mut position) = self.highlighted else {
            return false;
        };

        loop {
            if position == 0 {
                return false;
            }
            position -= 1;
            if !self.entries[position].is_hidden() {
                break;
            }
        }

        self.highlighted = Some(position);
        true
    }

    /// Moves the cursor forward to the next folder with unread or new mail.
    ///
    /// Hidden state is ignored for this scan. With `wrap` the scan continues
    /// from the start after falling off the end, but fails the moment it
    /// returns to the starting position — the scan must move at least one
    /// step and land on a match, so a lone matching start entry is never an
    /// immediate self-match.
    pub fn select_next_new(&mut self, store: &dyn MailStore, wrap: bool) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let Some(start) = self.highlighted else {
            return false;
        };

        let mut position = start;
        loop {
            position += 1;
            if position == self.entries.len() {
                if !wrap {
                    return false;
                }
                position = 0;
            }
            if position == start {
                return false;
            }
            let folder = self.entries[position].folder();
            if store.has_new(folder) || store.counts(folder).unread > 0 {
                break;
            }
        }

        self.highlighted = Some(position);
        true
    }

    /// Moves the cursor backward to the previous folder with unread or new
    /// mail. Wrap semantics mirror [`select_next_new`](Self::select_next_new).
    pub fn select_prev_new(&mut self, store: &dyn MailStore, wrap: bool) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let Some(start) = self.highlighted else {
            return false;
        };

        let mut position = start;
        loop {
            if position == 0 {
                if !wrap {
                    return false;
                }
                position = self.entries.len() - 1;
            } else {
                position -= 1;
            }
            if position == start {
                return false;
            }
            let folder = self.entries[position].folder();
            if store.has_new(folder) || store.counts(folder).unread > 0 {
                break;
            }
        }

        self.highlighted = Some(position);
        true
    }

    /// Moves the cursor to the first entry of the next page.
    ///
    /// Jumps to the bottom of the current window and steps forward once.
    /// Should that leave the cursor on a hidden entry (possible when counts
    /// changed since the last frame), it steps back to the nearest visible
    /// one. Returns whether the cursor actually moved.
    pub fn select_page_down(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let Some(bottom) = self.bottom else {
            return false;
        };

        let original = self.highlighted;
        self.highlighted = Some(bottom);
        self.select_next();
        if self.highlighted_entry().is_some_and(Entry::is_hidden) {
            self.select_prev();
        }

        original != self.highlighted
    }

    /// Moves the cursor to the last entry of the previous page.
    ///
    /// Mirror image of [`select_page_down`](Self::select_page_down), anchored
    /// on the top of the current window.
    pub fn select_page_up(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let Some(top) = self.top else {
            return false;
        };

        let original = self.highlighted;
        self.highlighted = Some(top);
        self.select_prev();
        if self.highlighted_entry().is_some_and(Entry::is_hidden) {
            self.select_next();
        }

        original != self.highlighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FolderId, MemoryStore};

    /// Store with `n` quiet folders; returns their ids.
    fn store_with(n: usize) -> (MemoryStore, Vec<FolderId>) {
        let mut store = MemoryStore::new();
        let ids = (0..n).map(|i| store.add_folder(format!("f{i}"))).collect();
        (store, ids)
    }

    fn registry_for(folders: &[FolderId]) -> Registry {
        let mut registry = Registry::new();
        for &f in folders {
            registry.insert(f, None);
        }
        registry
    }

    #[test]
    fn next_and_prev_move_over_visible_entries() {
        let (_, ids) = store_with(3);
        let mut registry = registry_for(&ids);
        registry.highlighted = Some(0);

        assert!(registry.select_next());
        assert_eq!(registry.highlighted(), Some(1));
        assert!(registry.select_prev());
        assert_eq!(registry.highlighted(), Some(0));
    }

    #[test]
    fn next_skips_hidden_and_fails_at_the_end() {
        let (_, ids) = store_with(4);
        let mut registry = registry_for(&ids);
        registry.entries[1].set_hidden(true);
        registry.entries[3].set_hidden(true);
        registry.highlighted = Some(0);

        assert!(registry.select_next());
        assert_eq!(registry.highlighted(), Some(2));

        // only a hidden entry remains ahead
        assert!(!registry.select_next());
        assert_eq!(registry.highlighted(), Some(2));
    }

    #[test]
    fn prev_skips_hidden_and_fails_at_the_start() {
        let (_, ids) = store_with(3);
        let mut registry = registry_for(&ids);
        registry.entries[1].set_hidden(true);
        registry.highlighted = Some(2);

        assert!(registry.select_prev());
        assert_eq!(registry.highlighted(), Some(0));
        assert!(!registry.select_prev());
        assert_eq!(registry.highlighted(), Some(0));
    }

    #[test]
    fn navigation_fails_without_cursor_or_entries() {
        let (store, ids) = store_with(2);
        let mut registry = registry_for(&ids);

        assert!(!registry.select_next());
        assert!(!registry.select_prev());
        assert!(!registry.select_next_new(&store, true));
        assert!(!registry.select_prev_new(&store, true));

        let mut empty = Registry::new();
        empty.highlighted = None;
        assert!(!empty.select_next());
        assert!(!empty.select_page_down());
    }

    #[test]
    fn next_new_stops_on_unread_ignoring_hidden() {
        let (mut store, ids) = store_with(3);
        store.set_unread(ids[1], 3);
        let mut registry = registry_for(&ids);
        registry.entries[1].set_hidden(true);
        registry.highlighted = Some(0);

        assert!(registry.select_next_new(&store, false));
        assert_eq!(registry.highlighted(), Some(1));
    }

    #[test]
    fn next_new_without_wrap_fails_past_the_last_match() {
        let (mut store, ids) = store_with(3);
        store.set_unread(ids[1], 3);
        let mut registry = registry_for(&ids);
        registry.highlighted = Some(1);

        assert!(!registry.select_next_new(&store, false));
        assert_eq!(registry.highlighted(), Some(1));
    }

    #[test]
    fn next_new_with_wrap_never_self_matches() {
        let (mut store, ids) = store_with(3);
        store.set_unread(ids[1], 3);
        let mut registry = registry_for(&ids);

        // from the sole matching entry: full circle, failure
        registry.highlighted = Some(1);
        assert!(!registry.select_next_new(&store, true));
        assert_eq!(registry.highlighted(), Some(1));

        // from elsewhere the wrap finds it
        registry.highlighted = Some(2);
        assert!(registry.select_next_new(&store, true));
        assert_eq!(registry.highlighted(), Some(1));
    }

    #[test]
    fn prev_new_wrap_mirrors_next_new() {
        let (mut store, ids) = store_with(3);
        store.set_has_new(ids[2], true);
        let mut registry = registry_for(&ids);

        registry.highlighted = Some(2);
        assert!(!registry.select_prev_new(&store, true));
        assert_eq!(registry.highlighted(), Some(2));

        registry.highlighted = Some(1);
        assert!(registry.select_prev_new(&store, true));
        assert_eq!(registry.highlighted(), Some(2));
    }

    #[test]
    fn prev_new_without_wrap_fails_at_the_start() {
        let (mut store, ids) = store_with(2);
        store.set_unread(ids[1], 1);
        let mut registry = registry_for(&ids);
        registry.highlighted = Some(0);

        assert!(!registry.select_prev_new(&store, false));
        assert_eq!(registry.highlighted(), Some(0));
    }

    #[test]
    fn unread_scan_scenario() {
        // A(quiet) B(unread=3) C(quiet), new-mail-only semantics live in the
        // filter; the scan itself ignores hidden flags.
        let (mut store, ids) = store_with(3);
        store.set_unread(ids[1], 3);
        let mut registry = registry_for(&ids);
        registry.entries[0].set_hidden(true);
        registry.entries[2].set_hidden(true);

        registry.highlighted = Some(0);
        assert!(registry.select_next_new(&store, false));
        assert_eq!(registry.highlighted(), Some(1));

        assert!(!registry.select_next_new(&store, false));
        assert!(!registry.select_next_new(&store, true));
        assert_eq!(registry.highlighted(), Some(1));
    }

    #[test]
    fn page_down_lands_past_the_window() {
        let (_, ids) = store_with(5);
        let mut registry = registry_for(&ids);
        registry.highlighted = Some(0);
        registry.top = Some(0);
        registry.bottom = Some(1);

        assert!(registry.select_page_down());
        assert_eq!(registry.highlighted(), Some(2));
    }

    #[test]
    fn page_down_falls_back_when_the_rest_is_hidden() {
        let (_, ids) = store_with(4);
        let mut registry = registry_for(&ids);
        registry.entries[2].set_hidden(true);
        registry.entries[3].set_hidden(true);
        registry.highlighted = Some(0);
        registry.top = Some(0);
        registry.bottom = Some(1);

        // cursor cannot advance past the window: lands back on 1
        assert!(registry.select_page_down());
        assert_eq!(registry.highlighted(), Some(1));

        // second attempt cannot move at all
        assert!(!registry.select_page_down());
        assert_eq!(registry.highlighted(), Some(1));
    }

    #[test]
    fn page_up_mirrors_page_down() {
        let (_, ids) = store_with(5);
        let mut registry = registry_for(&ids);
        registry.highlighted = Some(4);
        registry.top = Some(3);
        registry.bottom = Some(4);

        assert!(registry.select_page_up());
        assert_eq!(registry.highlighted(), Some(2));

        registry.top = Some(0);
        registry.highlighted = Some(0);
        assert!(!registry.select_page_up());
        assert_eq!(registry.highlighted(), Some(0));
    }
}
