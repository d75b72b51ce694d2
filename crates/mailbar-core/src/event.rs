//! Commands and lifecycle events consumed by the panel.
//!
//! The UI's command dispatcher translates key presses into [`Command`]s and
//! the mail backend reports folder lifecycle changes as [`FolderEvent`]s.
//! Both flow **outside → panel**; the panel never creates them itself.

use crate::store::FolderId;

/// A selection command for the panel cursor.
///
/// Commands only move the highlighted cursor; they never open a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Highlight the next visible folder.
    SelectNext,
    /// Highlight the previous visible folder.
    SelectPrev,
    /// Highlight the next folder with unread or new mail.
    SelectNextUnread,
    /// Highlight the previous folder with unread or new mail.
    SelectPrevUnread,
    /// Highlight the first folder of the next page.
    PageDown,
    /// Highlight the last folder of the previous page.
    PageUp,
}

/// A folder lifecycle notification from the mail backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderEvent {
    /// A folder appeared and should be listed.
    Created(FolderId),
    /// A folder disappeared and must be dropped from the list.
    Deleted(FolderId),
}
