use std::collections::HashSet;

use super::entry::{Entry, File, Folder};

/// The contents of one location as reported by the device.
///
/// Holds the entries in server order together with the folder and file
/// subsets, each keeping the relative order of the full list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Listing {
    entries: Vec<Entry>,
    folders: Vec<Folder>,
    files: Vec<File>,
}

impl Listing {
    /// Partition decoded entries by kind.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut folders = Vec::new();
        let mut files = Vec::new();

        for entry in &entries {
            match entry {
                Entry::Folder(folder) => folders.push(folder.clone()),
                Entry::File(file) => files.push(file.clone()),
            }
        }

        Self {
            entries,
            folders,
            files,
        }
    }

    /// All entries in server order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids of every entry in the listing.
    pub fn ids(&self) -> HashSet<&str> {
        self.entries.iter().map(Entry::id).collect()
    }

    /// First folder with the given display name.
    pub fn find_folder(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.name() == name)
    }

    /// First file with the given display name.
    pub fn find_file(&self, name: &str) -> Option<&File> {
        self.files.iter().find(|file| file.name() == name)
    }
}

impl FromIterator<Entry> for Listing {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}
