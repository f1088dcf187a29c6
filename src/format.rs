//! Display formatting for listings and trees.

use tabletfs_core::{File, Folder, TreeStyle};

/// Indent repeated per tree level.
const TREE_INDENT: &str = "|  ";
const FILE_GLYPH: &str = "🗒️ ";
const FOLDER_GLYPH: &str = "📂";

/// Glyph style used for `tree` output.
pub fn glyph_style() -> TreeStyle {
    TreeStyle::new(
        TREE_INDENT,
        format!("├─ {FILE_GLYPH} "),
        format!("├─ {FOLDER_GLYPH} "),
    )
}

/// Header line naming the location a tree was rendered from.
pub fn tree_header(location: Option<&Folder>, plain: bool) -> String {
    let name = location.map_or("Root", Folder::name);
    if plain {
        format!("{name}:\n")
    } else {
        format!("{FOLDER_GLYPH} {name}:\n")
    }
}

/// One `ls` line for a folder.
pub fn folder_line(folder: &Folder, long: bool) -> String {
    if long {
        format!(
            "{:<6} v{:<4} {} {:>5}  {}/",
            "folder",
            folder.meta.version,
            folder.meta.modified.format("%Y-%m-%d %H:%M"),
            "-",
            folder.name()
        )
    } else {
        format!("{}/", folder.name())
    }
}

/// One `ls` line for a file.
pub fn file_line(file: &File, long: bool) -> String {
    if long {
        let pages = file
            .page_count()
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        format!(
            "{:<6} v{:<4} {} {:>5}  {}",
            "file",
            file.meta.version,
            file.meta.modified.format("%Y-%m-%d %H:%M"),
            pages,
            file.name()
        )
    } else {
        file.name().to_string()
    }
}
