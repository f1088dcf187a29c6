//! Cursor over the device's document tree.
//!
//! The tree is discovered lazily: every move fetches the listing of the new
//! location. Folders are cached by id as they are seen so that moving to a
//! parent never needs a lookup request.
//!
//! # Request accounting
//!
//! - [`Navigator::load`], [`Navigator::move_folder`], [`Navigator::move_parent`]
//!   and [`Navigator::refresh`] issue exactly one request when they succeed
//! - [`Navigator::move_to_root`] and [`Navigator::current_location`] issue none
//! - rejected moves (`InvalidTarget`, `NoParent`, `CacheMiss`) issue none and
//!   leave the cursor untouched

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::NavError;
use crate::fetch::{HttpTransport, Transport, fetch_listing};
use crate::models::{Entry, File, Folder, Listing};

// =============================================================================
// Navigation State
// =============================================================================

/// Cursor position and folder cache.
///
/// `current_path` is empty at root and the current folder's id otherwise.
/// The cache only grows; re-fetching a folder overwrites its cached value.
#[derive(Clone, Debug, Default)]
pub struct NavigationState {
    current_folder: Option<Folder>,
    current_path: String,
    folder_cache: HashMap<String, Folder>,
}

impl NavigationState {
    pub fn current_folder(&self) -> Option<&Folder> {
        self.current_folder.as_ref()
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn cached_folder(&self, id: &str) -> Option<&Folder> {
        self.folder_cache.get(id)
    }

    pub fn cache_len(&self) -> usize {
        self.folder_cache.len()
    }

    fn cache(&mut self, folder: &Folder) {
        self.folder_cache
            .insert(folder.id().to_string(), folder.clone());
    }

    fn enter(&mut self, folder: &Folder) {
        self.current_path = folder.id().to_string();
        self.current_folder = Some(folder.clone());
        self.cache(folder);
    }

    fn reset(&mut self) {
        self.current_folder = None;
        self.current_path.clear();
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Single-cursor navigator over one device.
///
/// Owns its transport, its [`NavigationState`] and the listing of the
/// current location.
#[derive(Debug)]
pub struct Navigator<T = HttpTransport> {
    transport: T,
    state: NavigationState,
    listing: Listing,
}

impl Navigator<HttpTransport> {
    /// Connect to `host` over HTTP and load the root listing.
    pub fn load(host: &str) -> Result<Self, NavError> {
        let transport = HttpTransport::new(host)?;
        Self::with_transport(transport)
    }
}

impl<T: Transport> Navigator<T> {
    /// Load the root listing through `transport`.
    ///
    /// No navigator is produced if the root fetch fails.
    pub fn with_transport(transport: T) -> Result<Self, NavError> {
        let listing = fetch_listing(&transport, "")?;
        let mut navigator = Self {
            transport,
            state: NavigationState::default(),
            listing: Listing::default(),
        };
        navigator.install(listing);
        debug!(entries = navigator.listing.len(), "loaded root listing");
        Ok(navigator)
    }

    /// Reset the cursor to root without fetching.
    ///
    /// The current listing is left as is; call [`Navigator::refresh`] to
    /// bring it in line with root.
    pub fn move_to_root(&mut self) {
        debug!("moving to root");
        self.state.reset();
    }

    /// Descend into `target` and load its listing.
    ///
    /// `target` is cached, so a later [`Navigator::move_parent`] from one of
    /// its children resolves without a request. If the fetch fails the
    /// cursor and listing stay where they were.
    pub fn move_folder(&mut self, target: &Folder) -> Result<(), NavError> {
        if target.is_unset() {
            return Err(NavError::InvalidTarget);
        }

        debug!(id = target.id(), name = target.name(), "moving into folder");
        let listing = fetch_listing(&self.transport, target.id())?;
        self.state.enter(target);
        self.install(listing);
        Ok(())
    }

    /// Ascend to the parent of the current folder and load its listing.
    ///
    /// Folders whose parent is root ascend to root and re-fetch it. Other
    /// parents are resolved from the folder cache only.
    pub fn move_parent(&mut self) -> Result<(), NavError> {
        let current = self
            .state
            .current_folder
            .as_ref()
            .ok_or(NavError::NoParent)?;

        if current.meta.is_at_root() {
            debug!("moving to root from {}", current.id());
            let listing = fetch_listing(&self.transport, "")?;
            self.state.reset();
            self.install(listing);
            return Ok(());
        }

        let parent_id = current.parent();
        let Some(parent) = self.state.folder_cache.get(parent_id).cloned() else {
            warn!(parent_id, "parent folder missing from cache");
            return Err(NavError::CacheMiss {
                parent_id: parent_id.to_string(),
            });
        };

        self.move_folder(&parent)
    }

    /// Re-fetch the listing of the current location.
    pub fn refresh(&mut self) -> Result<(), NavError> {
        let listing = fetch_listing(&self.transport, &self.state.current_path)?;
        self.install(listing);
        Ok(())
    }

    fn install(&mut self, listing: Listing) {
        for folder in listing.folders() {
            self.state.cache(folder);
        }
        self.listing = listing;
    }
}

impl<T> Navigator<T> {
    /// Current folder, or `None` at root.
    pub fn current_location(&self) -> Option<&Folder> {
        self.state.current_folder()
    }

    pub fn is_at_root(&self) -> bool {
        self.state.current_folder.is_none()
    }

    /// Location token of the next request.
    pub fn current_path(&self) -> &str {
        self.state.current_path()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn entries(&self) -> &[Entry] {
        self.listing.entries()
    }

    pub fn folders(&self) -> &[Folder] {
        self.listing.folders()
    }

    pub fn files(&self) -> &[File] {
        self.listing.files()
    }

    /// First folder in the current listing named `name`.
    pub fn find_folder(&self, name: &str) -> Option<&Folder> {
        self.listing.find_folder(name)
    }

    /// First file in the current listing named `name`.
    pub fn find_file(&self, name: &str) -> Option<&File> {
        self.listing.find_file(name)
    }

    pub fn cached_folder(&self, id: &str) -> Option<&Folder> {
        self.state.cached_folder(id)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
