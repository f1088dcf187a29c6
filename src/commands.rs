//! Command execution against a navigator.
//!
//! Paths are `/`-separated folder names resolved from the navigator's
//! current location by successive `move_folder` calls.

use anyhow::{Context, Result, bail};
use tabletfs_core::{Navigator, Transport, TreeStyle, render_tree_with};
use tracing::debug;

use crate::cli::Command;
use crate::format;

/// Run one command and return its output.
pub fn execute<T: Transport>(navigator: &mut Navigator<T>, command: &Command) -> Result<String> {
    match command {
        Command::Tree { path, plain } => tree(navigator, path.as_deref(), *plain),
        Command::Ls { path, long } => ls(navigator, path.as_deref(), *long),
        Command::Info { path } => info(navigator, path),
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Descend through each folder named in `path`.
pub fn descend<T: Transport>(navigator: &mut Navigator<T>, path: &str) -> Result<()> {
    for name in segments(path) {
        let Some(folder) = navigator.find_folder(name).cloned() else {
            bail!("no such folder: {name}");
        };
        debug!(name, "resolving path segment");
        navigator
            .move_folder(&folder)
            .with_context(|| format!("failed to open {name}"))?;
    }
    Ok(())
}

fn tree<T: Transport>(navigator: &mut Navigator<T>, path: Option<&str>, plain: bool) -> Result<String> {
    descend(navigator, path.unwrap_or_default())?;

    let style = if plain {
        TreeStyle::plain()
    } else {
        format::glyph_style()
    };
    let mut out = format::tree_header(navigator.current_location(), plain);
    out.push_str(&render_tree_with(navigator, &style).context("failed to walk tree")?);
    Ok(out)
}

fn ls<T: Transport>(navigator: &mut Navigator<T>, path: Option<&str>, long: bool) -> Result<String> {
    descend(navigator, path.unwrap_or_default())?;

    let mut out = String::new();
    for folder in navigator.folders() {
        out.push_str(&format::folder_line(folder, long));
        out.push('\n');
    }
    for file in navigator.files() {
        out.push_str(&format::file_line(file, long));
        out.push('\n');
    }
    Ok(out)
}

fn info<T: Transport>(navigator: &mut Navigator<T>, path: &str) -> Result<String> {
    let (parent, name) = match path.trim_end_matches('/').rsplit_once('/') {
        Some((parent, name)) => (parent, name),
        None => ("", path.trim_end_matches('/')),
    };
    descend(navigator, parent)?;

    let Some(entry) = navigator.entries().iter().find(|e| e.name() == name) else {
        bail!("no such entry: {path}");
    };
    let mut out = serde_json::to_string_pretty(entry)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletfs_core::MockTransport;

    const ROOT: &str = r#"[
        {"ID": "agenda", "Parent": "", "Type": "DocumentType", "VissibleName": "Agenda", "pageCount": 3},
        {"ID": "work", "Parent": "", "Type": "CollectionType", "VissibleName": "Work"}
    ]"#;
    const WORK: &str = r#"[
        {"ID": "notes", "Parent": "work", "Type": "CollectionType", "VissibleName": "Notes"},
        {"ID": "plan", "Parent": "work", "Type": "DocumentType", "VissibleName": "Plan"}
    ]"#;
    const NOTES: &str = r#"[
        {"ID": "meeting", "Parent": "notes", "Type": "DocumentType", "VissibleName": "Meeting", "fileType": "notebook"}
    ]"#;

    fn navigator() -> Navigator<MockTransport> {
        let transport = MockTransport::new()
            .with_listing("", ROOT)
            .with_listing("work", WORK)
            .with_listing("notes", NOTES);
        Navigator::with_transport(transport).unwrap()
    }

    #[test]
    fn test_tree_from_root() {
        let mut nav = navigator();
        let command = Command::Tree {
            path: None,
            plain: true,
        };

        let out = execute(&mut nav, &command).unwrap();

        assert_eq!(
            out,
            "Root:\nAgenda\nWork/\n  Plan\n  Notes/\n    Meeting\n"
        );
    }

    #[test]
    fn test_tree_from_path_with_glyphs() {
        let mut nav = navigator();
        let command = Command::Tree {
            path: Some("Work/Notes".to_string()),
            plain: false,
        };

        let out = execute(&mut nav, &command).unwrap();

        assert_eq!(out, "📂 Notes:\n├─ 🗒️  Meeting\n");
    }

    #[test]
    fn test_ls_lists_folders_first() {
        let mut nav = navigator();
        let command = Command::Ls {
            path: Some("Work".to_string()),
            long: false,
        };

        assert_eq!(execute(&mut nav, &command).unwrap(), "Notes/\nPlan\n");
    }

    #[test]
    fn test_ls_unknown_folder() {
        let mut nav = navigator();
        let command = Command::Ls {
            path: Some("Missing".to_string()),
            long: false,
        };

        let err = execute(&mut nav, &command).unwrap_err();
        assert_eq!(err.to_string(), "no such folder: Missing");
        assert_eq!(nav.transport().request_count(), 1);
    }

    #[test]
    fn test_info_prints_entry_json() {
        let mut nav = navigator();
        let command = Command::Info {
            path: "Work/Notes/Meeting".to_string(),
        };

        let out = execute(&mut nav, &command).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["ID"], "meeting");
        assert_eq!(value["Type"], "DocumentType");
        assert_eq!(value["fileType"], "notebook");
    }

    #[test]
    fn test_info_root_entry() {
        let mut nav = navigator();
        let command = Command::Info {
            path: "Work".to_string(),
        };

        let out = execute(&mut nav, &command).unwrap();
        assert!(out.contains("\"CollectionType\""));
        assert!(nav.is_at_root());
    }
}
