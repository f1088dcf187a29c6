//! Client-side model of a tablet's document store.
//!
//! The device lists one location at a time (`POST <host>/documents/<id>`).
//! This crate decodes those listings and walks the tree they describe:
//!
//! - [`models`] - [`Entry`], [`Folder`], [`File`] descriptors and [`Listing`]
//! - [`fetch`] - the [`Transport`] seam and [`fetch_listing`]
//! - [`Navigator`] - cursor moves backed by a folder cache
//! - [`render_tree`] - depth-first rendering through the navigator
//!
//! ```no_run
//! use tabletfs_core::{Navigator, render_tree};
//!
//! let mut navigator = Navigator::load("10.11.99.1")?;
//! print!("{}", render_tree(&mut navigator)?);
//! # Ok::<(), tabletfs_core::NavError>(())
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
mod navigator;
mod tree;

pub use error::{FetchError, NavError};
#[cfg(any(test, feature = "mock"))]
pub use fetch::MockTransport;
pub use fetch::{HttpTransport, Transport, fetch_listing};
pub use models::{Entry, EntryMeta, File, Folder, Kind, Listing};
pub use navigator::{NavigationState, Navigator};
pub use tree::{TreeStyle, render_tree, render_tree_with};
