use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{FILE_TYPE, FOLDER_TYPE};

// =============================================================================
// Shared Metadata
// =============================================================================

/// Identity and metadata fields shared by every entry descriptor.
///
/// Field names follow the device's wire format, including its spelling of
/// `VissibleName`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct EntryMeta {
    /// Opaque server-assigned identifier, unique per device
    #[serde(rename = "ID")]
    pub id: String,
    /// Id of the containing folder (empty string for root)
    #[serde(rename = "Parent", default)]
    pub parent: String,
    /// Display name
    #[serde(rename = "VissibleName", default)]
    pub name: String,
    /// Per-entry revision counter
    #[serde(rename = "Version", default)]
    pub version: u64,
    /// Last client-side modification
    #[serde(rename = "ModifiedClient", default)]
    pub modified: DateTime<Utc>,
    /// Bookmarked on the device
    #[serde(rename = "Bookmarked", default)]
    pub bookmarked: bool,
}

impl EntryMeta {
    /// Create metadata with the routing fields set and the rest defaulted.
    pub fn new(id: impl Into<String>, parent: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: parent.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Check if this entry lives directly under root.
    pub fn is_at_root(&self) -> bool {
        self.parent.is_empty()
    }
}

impl fmt::Display for EntryMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {}", self.name)
    }
}

// =============================================================================
// Entry Kinds
// =============================================================================

/// Entry discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Folder,
    File,
}

impl Kind {
    /// The `Type` string the device uses for this kind.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Folder => FOLDER_TYPE,
            Self::File => FILE_TYPE,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => write!(f, "folder"),
            Self::File => write!(f, "file"),
        }
    }
}

/// A folder (`CollectionType`) descriptor.
///
/// Any fields beyond [`EntryMeta`] are kept in `extra` untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Folder {
    #[serde(flatten)]
    pub meta: EntryMeta,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Folder {
    pub fn new(id: impl Into<String>, parent: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            meta: EntryMeta::new(id, parent, name),
            extra: Map::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn parent(&self) -> &str {
        &self.meta.parent
    }

    /// A folder without an id does not name any location.
    pub fn is_unset(&self) -> bool {
        self.meta.id.is_empty()
    }
}

/// A file (`DocumentType`) descriptor.
///
/// Page lists, layout and last-used tool state live in `extra` and are
/// preserved verbatim for collaborators such as a downloader.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct File {
    #[serde(flatten)]
    pub meta: EntryMeta,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl File {
    pub fn new(id: impl Into<String>, parent: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            meta: EntryMeta::new(id, parent, name),
            extra: Map::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn parent(&self) -> &str {
        &self.meta.parent
    }

    /// Underlying document format (e.g. `"pdf"`, `"epub"`, `"notebook"`).
    pub fn file_type(&self) -> Option<&str> {
        self.extra.get("fileType").and_then(Value::as_str)
    }

    pub fn page_count(&self) -> Option<u64> {
        self.extra.get("pageCount").and_then(Value::as_u64)
    }

    /// Size in bytes. The device reports it as a decimal string.
    pub fn size_in_bytes(&self) -> Option<u64> {
        match self.extra.get("sizeInBytes")? {
            Value::String(s) => s.parse().ok(),
            other => other.as_u64(),
        }
    }
}

// =============================================================================
// Entry Union
// =============================================================================

/// One entry descriptor from a listing, decoded by its `Type` discriminant.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "Type")]
pub enum Entry {
    #[serde(rename = "CollectionType")]
    Folder(Folder),
    #[serde(rename = "DocumentType")]
    File(File),
}

impl Entry {
    pub fn meta(&self) -> &EntryMeta {
        match self {
            Entry::Folder(folder) => &folder.meta,
            Entry::File(file) => &file.meta,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Entry::Folder(_) => Kind::Folder,
            Entry::File(_) => Kind::File,
        }
    }

    pub fn id(&self) -> &str {
        &self.meta().id
    }

    pub fn name(&self) -> &str {
        &self.meta().name
    }

    pub fn parent(&self) -> &str {
        &self.meta().parent
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Entry::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Entry::Folder(folder) => Some(folder),
            Entry::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Entry::File(file) => Some(file),
            Entry::Folder(_) => None,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.meta(), f)
    }
}

impl From<Folder> for Entry {
    fn from(folder: Folder) -> Self {
        Entry::Folder(folder)
    }
}

impl From<File> for Entry {
    fn from(file: File) -> Self {
        Entry::File(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file_descriptor() -> Value {
        json!({
            "Bookmarked": true,
            "ID": "f-1",
            "ModifiedClient": "2019-11-02T10:15:30.123456Z",
            "Parent": "",
            "Type": "DocumentType",
            "Version": 7,
            "VissibleName": "Agenda",
            "fileType": "pdf",
            "pageCount": 12,
            "sizeInBytes": "48213",
            "pages": ["p-1", "p-2"],
            "extraMetadata": { "LastTool": "Ballpoint", "LastPen": "Finelinerv2" }
        })
    }

    // =========================================================================
    // Decoding Tests
    // =========================================================================

    #[test]
    fn test_decode_folder_by_discriminant() {
        let entry: Entry = serde_json::from_value(json!({
            "ID": "t1",
            "Parent": "",
            "Type": "CollectionType",
            "VissibleName": "Test",
            "Version": 1,
            "ModifiedClient": "2020-01-01T00:00:00Z",
            "Bookmarked": false
        }))
        .unwrap();

        assert_eq!(entry.kind(), Kind::Folder);
        let folder = entry.as_folder().expect("should be a folder");
        assert_eq!(folder.id(), "t1");
        assert_eq!(folder.name(), "Test");
        assert!(folder.meta.is_at_root());
        assert!(folder.extra.is_empty());
    }

    #[test]
    fn test_decode_file_keeps_opaque_fields() {
        let entry: Entry = serde_json::from_value(file_descriptor()).unwrap();

        let file = entry.as_file().expect("should be a file");
        assert_eq!(file.meta.version, 7);
        assert!(file.meta.bookmarked);
        assert_eq!(file.file_type(), Some("pdf"));
        assert_eq!(file.page_count(), Some(12));
        assert_eq!(file.size_in_bytes(), Some(48213));
        assert_eq!(file.extra["extraMetadata"]["LastTool"], "Ballpoint");
        assert!(!file.extra.contains_key("Type"));
    }

    #[test]
    fn test_file_round_trips_verbatim() {
        let original = file_descriptor();
        let entry: Entry = serde_json::from_value(original.clone()).unwrap();
        let mut encoded = serde_json::to_value(&entry).unwrap();

        // chrono normalizes the timestamp text; compare it separately.
        let modified = encoded
            .as_object_mut()
            .unwrap()
            .remove("ModifiedClient")
            .unwrap();
        assert_eq!(
            modified.as_str().unwrap().parse::<DateTime<Utc>>().unwrap(),
            entry.meta().modified
        );

        let mut expected = original;
        expected.as_object_mut().unwrap().remove("ModifiedClient");
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_unknown_discriminant_is_rejected() {
        let result: Result<Entry, _> = serde_json::from_value(json!({
            "ID": "x",
            "Type": "TrashType",
            "VissibleName": "Trash"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result: Result<Entry, _> = serde_json::from_value(json!({
            "Type": "CollectionType",
            "VissibleName": "Nameless"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let entry: Entry = serde_json::from_value(json!({
            "ID": "f",
            "Type": "DocumentType"
        }))
        .unwrap();

        let meta = entry.meta();
        assert_eq!(meta.parent, "");
        assert_eq!(meta.version, 0);
        assert!(!meta.bookmarked);
        assert_eq!(meta.modified, DateTime::<Utc>::default());
    }

    // =========================================================================
    // Accessor Tests
    // =========================================================================

    #[test]
    fn test_entry_display() {
        let entry = Entry::from(File::new("id", "", "Notes"));
        assert_eq!(entry.to_string(), "name: Notes");
    }

    #[test]
    fn test_unset_folder() {
        assert!(Folder::default().is_unset());
        assert!(!Folder::new("a", "", "A").is_unset());
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(Kind::Folder.wire_name(), "CollectionType");
        assert_eq!(Kind::File.wire_name(), "DocumentType");
        assert_eq!(Kind::File.to_string(), "file");
    }

    #[test]
    fn test_size_in_bytes_accepts_numbers() {
        let mut file = File::new("id", "", "n");
        file.extra.insert("sizeInBytes".to_string(), json!(512));
        assert_eq!(file.size_in_bytes(), Some(512));
        assert_eq!(file.page_count(), None);
    }
}
