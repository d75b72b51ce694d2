//! The folder-panel engine.
//!
//! This module contains the [`registry::Registry`] of folder [`entry::Entry`]s
//! together with the passes that keep it consistent: visibility
//! [`filter`]ing, [`sort`]ing, selection [`navigate`]ion, and [`viewport`]
//! framing. The [`sidebar::Sidebar`] facade orchestrates them and is the
//! only type a frontend needs to hold.

pub mod entry;
pub mod filter;
pub mod navigate;
pub mod registry;
pub mod sidebar;
pub mod sort;
pub mod viewport;
