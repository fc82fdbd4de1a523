//! Load dialog: a directory listing narrowed to array files.
//!
//! Entering a directory re-reads it; picking a file yields a path ready for
//! [`crate::storage::load_grid`]. A directory that cannot be read is reported
//! as [`GridplotError::Io`] and the previous listing stays.

pub mod ui;

use crate::error::{GridplotError, Result};
use crate::storage;
use ratatui::widgets::ListState;
use std::fs;
use std::path::{Path, PathBuf};

/// One line of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// The parent directory.
    Parent(PathBuf),
    /// A sub-directory.
    Dir(PathBuf),
    /// A file with a known array extension.
    File(PathBuf),
}

impl Entry {
    /// Text shown in the list.
    pub fn label(&self) -> String {
        match self {
            Entry::Parent(_) => "../".to_string(),
            Entry::Dir(path) => format!("{}/", file_name(path)),
            Entry::File(path) => file_name(path),
        }
    }
}

/// Load dialog state.
#[derive(Debug)]
pub struct FileBrowserState {
    /// Directory being listed.
    pub dir: PathBuf,
    /// Listing of `dir`.
    pub entries: Vec<Entry>,
    /// Highlighted entry and scroll offset.
    pub list: ListState,
    /// Is the dialog open.
    pub visible: bool,
}

impl FileBrowserState {
    /// Create a closed dialog rooted at the working directory.
    pub fn new() -> Self {
        Self {
            dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            entries: Vec::new(),
            list: ListState::default(),
            visible: false,
        }
    }

    /// Open the dialog on `dir`.
    pub fn open(&mut self, dir: PathBuf) -> Result<()> {
        self.change_dir(dir)?;
        self.visible = true;
        Ok(())
    }

    /// Close the dialog.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Move the highlight up.
    pub fn cursor_up(&mut self) {
        let i = self.list.selected().unwrap_or(0);
        self.list.select(Some(i.saturating_sub(1)));
    }

    /// Move the highlight down.
    pub fn cursor_down(&mut self) {
        if let Some(i) = self.list.selected() {
            if i + 1 < self.entries.len() {
                self.list.select(Some(i + 1));
            }
        }
    }

    /// Highlighted entry.
    pub fn current_entry(&self) -> Option<&Entry> {
        self.entries.get(self.list.selected()?)
    }

    /// Enter the highlighted directory, or return the highlighted file.
    pub fn select_current(&mut self) -> Result<Option<PathBuf>> {
        match self.current_entry().cloned() {
            Some(Entry::Parent(dir)) | Some(Entry::Dir(dir)) => {
                self.change_dir(dir)?;
                Ok(None)
            }
            Some(Entry::File(path)) => Ok(Some(path)),
            None => Ok(None),
        }
    }

    /// List the parent directory.
    pub fn go_to_parent(&mut self) -> Result<()> {
        match self.dir.parent() {
            Some(parent) => self.change_dir(parent.to_path_buf()),
            None => Ok(()),
        }
    }

    fn change_dir(&mut self, dir: PathBuf) -> Result<()> {
        let entries = list_dir(&dir)?;
        self.list = ListState::default().with_selected(Some(0));
        self.entries = entries;
        self.dir = dir;
        Ok(())
    }
}

impl Default for FileBrowserState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read `dir`: parent first, then sub-directories, then array files.
///
/// Dot-prefixed names are skipped. Each group is sorted case-insensitively.
pub fn list_dir(dir: &Path) -> Result<Vec<Entry>> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(GridplotError::Io)? {
        let path = entry?.path();
        if file_name(&path).starts_with('.') {
            continue;
        }
        // Follows symlinks
        if path.is_dir() {
            dirs.push(path);
        } else if storage::is_array_file(&path) {
            files.push(path);
        }
    }
    dirs.sort_by_key(|p| file_name(p).to_lowercase());
    files.sort_by_key(|p| file_name(p).to_lowercase());

    let parent = dir.parent().map(|p| Entry::Parent(p.to_path_buf()));
    Ok(parent
        .into_iter()
        .chain(dirs.into_iter().map(Entry::Dir))
        .chain(files.into_iter().map(Entry::File))
        .collect())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
