//! Depth-first rendering of the reachable tree.
//!
//! The renderer only drives the navigator's public moves: each folder costs
//! one request to descend and one to ascend.

use crate::error::NavError;
use crate::fetch::Transport;
use crate::models::Folder;
use crate::navigator::Navigator;

/// Line prefixes used when rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeStyle {
    /// Repeated once per depth level
    pub indent: String,
    /// Placed before file names
    pub file_marker: String,
    /// Placed before folder names
    pub folder_marker: String,
}

impl TreeStyle {
    pub fn new(
        indent: impl Into<String>,
        file_marker: impl Into<String>,
        folder_marker: impl Into<String>,
    ) -> Self {
        Self {
            indent: indent.into(),
            file_marker: file_marker.into(),
            folder_marker: folder_marker.into(),
        }
    }

    /// Two-space indentation, no markers.
    pub fn plain() -> Self {
        Self::new("  ", "", "")
    }

    fn file_line(&self, depth: usize, name: &str) -> String {
        format!("{}{}{}\n", self.indent.repeat(depth), self.file_marker, name)
    }

    fn folder_line(&self, depth: usize, name: &str) -> String {
        format!("{}{}{}/\n", self.indent.repeat(depth), self.folder_marker, name)
    }
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self::plain()
    }
}

/// Render the tree below the navigator's current location in plain style.
pub fn render_tree<T: Transport>(navigator: &mut Navigator<T>) -> Result<String, NavError> {
    render_tree_with(navigator, &TreeStyle::default())
}

/// Render the tree below the navigator's current location.
///
/// Files come before folders at every level, each in listing order, and
/// each folder is followed by its subtree one level deeper. The cursor ends
/// where it started.
pub fn render_tree_with<T: Transport>(
    navigator: &mut Navigator<T>,
    style: &TreeStyle,
) -> Result<String, NavError> {
    let mut out = String::new();
    render_level(navigator, style, 0, &mut out)?;
    Ok(out)
}

fn render_level<T: Transport>(
    navigator: &mut Navigator<T>,
    style: &TreeStyle,
    depth: usize,
    out: &mut String,
) -> Result<(), NavError> {
    // Moves replace the listing, so snapshot this level first.
    let folders: Vec<Folder> = navigator.folders().to_vec();

    for file in navigator.files() {
        out.push_str(&style.file_line(depth, file.name()));
    }

    for folder in &folders {
        out.push_str(&style.folder_line(depth, folder.name()));
        navigator.move_folder(folder)?;
        render_level(navigator, style, depth + 1, out)?;
        navigator.move_parent()?;
    }

    Ok(())
}
