//! Data models for the device's document store.
//!
//! Contains:
//! - [`Entry`], [`Folder`], [`File`], [`EntryMeta`], [`Kind`] - entry descriptors
//! - [`Listing`] - one location's entries, partitioned by kind

mod entry;
mod listing;

pub use entry::{Entry, EntryMeta, File, Folder, Kind};
pub use listing::Listing;
