//! The panel facade.
//!
//! [`Sidebar`] is the one type a frontend holds. It owns the registry and
//! the policy, consumes commands and folder lifecycle events, and turns a
//! redraw request into a [`Snapshot`] through [`Sidebar::prepare`]: filter,
//! sort, re-anchor the positional indices, re-validate the cursor, frame the
//! viewport. Rendering the snapshot is the frontend's business.

use tracing::{debug, trace};

use crate::config::PanelConfig;
use crate::event::{Command, FolderEvent};
use crate::panel::entry::{Entry, EntryId};
use crate::panel::registry::Registry;
use crate::panel::sort::{self, SortSpec};
use crate::panel::{filter, viewport};
use crate::store::{FolderId, MailStore};

/// One row of a prepared panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Stable handle of the entry.
    pub entry: EntryId,
    /// Identity of the folder on this row.
    pub folder: FolderId,
    /// `true` when the renderer should skip this row.
    pub hidden: bool,
    /// Cached display label, as last set via [`Sidebar::set_label`].
    pub label: String,
}

/// The computed window handed to the renderer.
///
/// `rows[i]` describes position `top + i`; hidden rows are included so the
/// renderer can skip them while keeping positions aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// First position of the window.
    pub top: usize,
    /// Last position of the window.
    pub bottom: usize,
    /// Position of the cursor.
    pub highlighted: usize,
    /// Position of the open folder's entry, when tracked.
    pub open: Option<usize>,
    /// The framed entries, in panel order.
    pub rows: Vec<Row>,
}

/// Stateful mail-folder panel.
#[derive(Debug, Clone)]
pub struct Sidebar {
    registry: Registry,
    config: PanelConfig,
    previous_sort: SortSpec,
    needs_redraw: bool,
}

impl Sidebar {
    /// Creates an empty panel with the given policy.
    ///
    /// The panel starts out needing a redraw so the first frame is drawn.
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        Self {
            previous_sort: config.sort,
            config,
            registry: Registry::new(),
            needs_redraw: true,
        }
    }

    /// Read access to the registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The current policy.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Changes the sort specification. A change schedules a redraw; the
    /// viewport is re-anchored on the next [`prepare`](Self::prepare).
    pub fn set_sort(&mut self, sort: SortSpec) {
        if self.config.sort != sort {
            self.config.sort = sort;
            self.needs_redraw = true;
        }
    }

    /// Toggles the new-mail-only visibility filter.
    pub fn set_new_mail_only(&mut self, on: bool) {
        if self.config.new_mail_only != on {
            self.config.new_mail_only = on;
            self.needs_redraw = true;
        }
    }

    /// Toggles wrap-around for the unread scans.
    pub fn set_next_new_wrap(&mut self, on: bool) {
        self.config.next_new_wrap = on;
    }

    /// `true` when something changed since the panel was last drawn.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns and clears the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// The folder under the cursor, if any.
    #[must_use]
    pub fn highlighted_folder(&self) -> Option<FolderId> {
        self.registry.highlighted_entry().map(Entry::folder)
    }

    /// Position of the open folder's entry, if tracked.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.registry.open()
    }

    /// Caches a display label for an entry. Returns `false` when the handle
    /// is no longer listed.
    pub fn set_label(&mut self, id: EntryId, label: impl Into<String>) -> bool {
        self.registry.set_label(id, label.into())
    }

    /// Recomputes `open` from the store's open-folder context and moves the
    /// cursor onto it.
    ///
    /// Clears `open` when nothing is open or the open folder is not listed.
    pub fn sync_open_folder(&mut self, store: &dyn MailStore) {
        self.registry.open = None;
        let Some(open) = store.open_folder() else {
            return;
        };

        if let Some(pos) = self
            .registry
            .entries
            .iter()
            .position(|e| e.folder() == open)
        {
            self.registry.open = Some(pos);
            self.registry.highlighted = Some(pos);
        }
    }

    /// Applies a folder lifecycle event.
    ///
    /// A creation appends an entry; a deletion removes one. Deleting a
    /// folder that is not listed is a silent no-op and does not schedule a
    /// redraw.
    pub fn handle_folder_event(&mut self, event: FolderEvent, store: &dyn MailStore) {
        match event {
            FolderEvent::Created(folder) => {
                self.registry.insert(folder, store.open_folder());
            }
            FolderEvent::Deleted(folder) => {
                if !self.registry.remove(folder) {
                    return;
                }
            }
        }
        self.needs_redraw = true;
    }

    /// Applies a selection command.
    ///
    /// Returns whether the cursor moved; a move schedules a redraw. With an
    /// unset cursor every command fails — the cursor is re-established on
    /// the next [`prepare`](Self::prepare).
    pub fn handle_command(&mut self, command: Command, store: &dyn MailStore) -> bool {
        if self.registry.highlighted().is_none() {
            return false;
        }

        let wrap = self.config.next_new_wrap;
        let moved = match command {
            Command::SelectNext => self.registry.select_next(),
            Command::SelectPrev => self.registry.select_prev(),
            Command::SelectNextUnread => self.registry.select_next_new(store, wrap),
            Command::SelectPrevUnread => self.registry.select_prev_new(store, wrap),
            Command::PageDown => self.registry.select_page_down(),
            Command::PageUp => self.registry.select_page_up(),
        };

        if moved {
            debug!(?command, highlighted = ?self.registry.highlighted(), "cursor moved");
            self.needs_redraw = true;
        }
        moved
    }

    /// Runs a full prepare pass and returns the window to draw.
    ///
    /// Returns `None` when there is nothing to frame (no entries, or a
    /// degenerate page size); the caller blanks the panel instead. The pass
    /// re-reads all folder state through `store`, so counter changes made
    /// anywhere in the application are reflected without notifications.
    pub fn prepare(&mut self, page_size: usize, store: &dyn MailStore) -> Option<Snapshot> {
        if self.registry.is_empty() || page_size == 0 {
            return None;
        }
        trace!(page_size, entries = self.registry.len(), "prepare pass");

        // indices are positional; survive the reorder through the handles
        let open_id = self.registry.open_entry().map(Entry::id);
        let highlighted_id = self.registry.highlighted_entry().map(Entry::id);

        filter::update_visibility(&mut self.registry, store, &self.config);
        sort::sort_entries(&mut self.registry, store, self.config.sort, self.previous_sort);

        self.registry.open = open_id.and_then(|id| self.registry.position_of(id));
        self.registry.highlighted = highlighted_id.and_then(|id| self.registry.position_of(id));

        let sort_changed = self.config.sort != self.previous_sort;
        viewport::revalidate_highlight(&mut self.registry, sort_changed);
        viewport::frame_viewport(&mut self.registry, page_size, self.config.new_mail_only);
        self.previous_sort = self.config.sort;

        self.snapshot()
    }

    fn snapshot(&self) -> Option<Snapshot> {
        let (Some(top), Some(bottom), Some(highlighted)) = (
            self.registry.top(),
            self.registry.bottom(),
            self.registry.highlighted(),
        ) else {
            return None;
        };

        let rows = self.registry.entries()[top..=bottom]
            .iter()
            .map(|e| Row {
                entry: e.id(),
                folder: e.folder(),
                hidden: e.is_hidden(),
                label: e.label().to_string(),
            })
            .collect();

        Some(Snapshot {
            top,
            bottom,
            highlighted,
            open: self.registry.open(),
            rows,
        })
    }
}
