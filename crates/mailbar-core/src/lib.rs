//! Mailbar core library — UI-agnostic mail-folder panel logic.
//!
//! `mailbar-core` implements the stateful engine behind a terminal panel
//! that lists a user's mail folders: a filterable, sortable registry of
//! folder entries plus the cursor and viewport indices that must stay
//! consistent across folder creation/deletion, navigation, live count
//! updates, and re-sorting. It is intentionally decoupled from any UI
//! framework; rendering and the mailbox backend both sit behind small
//! contracts.
//!
//! # Modules
//!
//! - [`panel`] — The engine: entry [`Registry`], visibility filtering,
//!   sorting, selection navigation, viewport framing, and the [`Sidebar`]
//!   facade that ties them together.
//! - [`store`] — The folder-provider contract ([`MailStore`], [`FolderId`])
//!   and an in-memory implementation ([`MemoryStore`]).
//! - [`event`] — [`Command`]s and [`FolderEvent`]s consumed by the panel.
//! - [`config`] — TOML-based panel policy ([`PanelConfig`]).
//! - [`error`] — Unified error type ([`CoreError`]) and result alias
//!   ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod event;
pub mod panel;
pub mod store;

pub use config::PanelConfig;
pub use error::{CoreError, CoreResult};
pub use event::{Command, FolderEvent};
pub use panel::entry::{Entry, EntryId};
pub use panel::registry::Registry;
pub use panel::sidebar::{Row, Sidebar, Snapshot};
pub use panel::sort::{SortKey, SortSpec};
pub use store::{FolderId, MailStore, MemoryStore, MessageCounts};
