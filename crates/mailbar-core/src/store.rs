//! Folder-provider contract between the panel engine and the mail backend.
//!
//! The engine never owns folders. It refers to them through opaque
//! [`FolderId`] handles and reads their live state through the [`MailStore`]
//! trait on every pass, so count changes made elsewhere in the application
//! are picked up on the next redraw without any notification machinery.
//!
//! [`MemoryStore`] is a complete in-memory implementation, suitable for
//! frontends that keep their own folder model and for tests.

/// Opaque, stable identity of a folder owned by the application.
///
/// Identities are never recycled within a session, so a plain counter is
/// enough to keep handles unambiguous across folder deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FolderId(u64);

impl FolderId {
    /// Wraps a raw identity. Callers are responsible for uniqueness.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identity value.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Live message counters for one folder.
///
/// Counts are treated as opaque data: the engine only ever compares them and
/// tests them against zero, so a backend reporting a transiently negative
/// value is passed through as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageCounts {
    /// Total number of messages.
    pub total: i64,
    /// Number of unread messages.
    pub unread: i64,
    /// Number of flagged messages.
    pub flagged: i64,
    /// Number of messages marked for deletion.
    pub deleted: i64,
    /// Number of tagged messages.
    pub tagged: i64,
}

/// Read-only view of the application's folders and open-folder context.
///
/// Implementations must report **live** counters: when a folder is currently
/// open, [`counts`](MailStore::counts) reflects the in-session state of the
/// open mailbox, not a stale snapshot taken when the folder was registered.
pub trait MailStore {
    /// Folder identities in the application's natural order.
    ///
    /// Used by natural-order restoration; folders unknown to the panel are
    /// skipped, panel entries missing from the list keep their position.
    fn folder_order(&self) -> Vec<FolderId>;

    /// Live counters for `id`. Unknown identities report all-zero counts.
    fn counts(&self, id: FolderId) -> MessageCounts;

    /// `true` when the folder has signalled new mail since it was last open.
    fn has_new(&self, id: FolderId) -> bool;

    /// The folder's path. Empty for unknown identities.
    fn path(&self, id: FolderId) -> &str;

    /// Optional human-readable description of the folder.
    fn description(&self, id: FolderId) -> Option<&str>;

    /// Identity of the currently open folder, if any.
    fn open_folder(&self) -> Option<FolderId>;
}

#[derive(Debug, Clone)]
struct MemFolder {
    id: FolderId,
    path: String,
    description: Option<String>,
    counts: MessageCounts,
    has_new: bool,
}

/// In-memory [`MailStore`] implementation.
///
/// Keeps folders in insertion order (which doubles as the natural order),
/// assigns identities from a private counter, and exposes setters for the
/// counters so tests and simple frontends can simulate mailbox activity.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    folders: Vec<MemFolder>,
    open: Option<FolderId>,
    next_id: u64,
}

impl MemoryStore {
    /// Creates an empty store with no open folder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a folder and returns its identity.
    pub fn add_folder(&mut self, path: impl Into<String>) -> FolderId {
        let id = FolderId(self.next_id);
        self.next_id += 1;
        self.folders.push(MemFolder {
            id,
            path: path.into(),
            description: None,
            counts: MessageCounts::default(),
            has_new: false,
        });
        id
    }

    /// Removes a folder. Returns `false` if the identity is unknown.
    pub fn remove_folder(&mut self, id: FolderId) -> bool {
        let Some(pos) = self.folders.iter().position(|f| f.id == id) else {
            return false;
        };
        self.folders.remove(pos);
        if self.open == Some(id) {
            self.open = None;
        }
        true
    }

    /// Sets or clears a folder's description.
    pub fn set_description(&mut self, id: FolderId, description: Option<String>) {
        if let Some(f) = self.folder_mut(id) {
            f.description = description;
        }
    }

    /// Replaces a folder's counters wholesale.
    pub fn set_counts(&mut self, id: FolderId, counts: MessageCounts) {
        if let Some(f) = self.folder_mut(id) {
            f.counts = counts;
        }
    }

    /// Sets the unread counter.
    pub fn set_unread(&mut self, id: FolderId, unread: i64) {
        if let Some(f) = self.folder_mut(id) {
            f.counts.unread = unread;
        }
    }

    /// Sets the flagged counter.
    pub fn set_flagged(&mut self, id: FolderId, flagged: i64) {
        if let Some(f) = self.folder_mut(id) {
            f.counts.flagged = flagged;
        }
    }

    /// Sets the total-message counter.
    pub fn set_total(&mut self, id: FolderId, total: i64) {
        if let Some(f) = self.folder_mut(id) {
            f.counts.total = total;
        }
    }

    /// Sets the has-new signal.
    pub fn set_has_new(&mut self, id: FolderId, has_new: bool) {
        if let Some(f) = self.folder_mut(id) {
            f.has_new = has_new;
        }
    }

    /// Sets or clears the open-folder context.
    pub fn set_open(&mut self, id: Option<FolderId>) {
        self.open = id;
    }

    /// Rearranges the natural order to match `order`.
    ///
    /// Identities missing from `order` keep their relative position at the
    /// end; unknown identities are ignored.
    pub fn reorder(&mut self, order: &[FolderId]) {
        let mut rearranged = Vec::with_capacity(self.folders.len());
        for &id in order {
            if let Some(pos) = self.folders.iter().position(|f| f.id == id) {
                rearranged.push(self.folders.remove(pos));
            }
        }
        rearranged.append(&mut self.folders);
        self.folders = rearranged;
    }

    fn folder(&self, id: FolderId) -> Option<&MemFolder> {
        self.folders.iter().find(|f| f.id == id)
    }

    fn folder_mut(&mut self, id: FolderId) -> Option<&mut MemFolder> {
        self.folders.iter_mut().find(|f| f.id == id)
    }
}

impl MailStore for MemoryStore {
    fn folder_order(&self) -> Vec<FolderId> {
        self.folders.iter().map(|f| f.id).collect()
    }

    fn counts(&self, id: FolderId) -> MessageCounts {
        self.folder(id).map(|f| f.counts).unwrap_or_default()
    }

    fn has_new(&self, id: FolderId) -> bool {
        self.folder(id).is_some_and(|f| f.has_new)
    }

    fn path(&self, id: FolderId) -> &str {
        self.folder(id).map_or("", |f| f.path.as_str())
    }

    fn description(&self, id: FolderId) -> Option<&str> {
        self.folder(id).and_then(|f| f.description.as_deref())
    }

    fn open_folder(&self) -> Option<FolderId> {
        self.open
    }
}
