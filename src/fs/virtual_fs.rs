//! Virtual File System
//!
//! Owns the immutable base tree and the mutation journal, memoizes the
//! materialized view per journal version, and exposes the narrow
//! open/read/create/delete/list contract used by the host.

use std::cell::{Cell, OnceCell};

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use super::journal::MutationJournal;
use super::materialize::{flatten, materialize, MaterializedView};
use super::path::{lookup, VfsPath};
use super::types::{file_kind, EntryRef, File, FlatFile, Folder, FsError};

/// Kind of difference between the base tree and the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
}

/// One changed file, with content before and after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub path: VfsPath,
    pub kind: ChangeKind,
    pub original: Option<String>,
    pub current: Option<String>,
}

pub struct VirtualFs {
    base: Folder,
    journal: MutationJournal,
    view: OnceCell<MaterializedView>,
    materializations: Cell<u64>,
    open: IndexSet<VfsPath>,
}

impl VirtualFs {
    /// Create a file system over a read-only base tree.
    pub fn new(base: Folder) -> Self {
        Self {
            base,
            journal: MutationJournal::new(),
            view: OnceCell::new(),
            materializations: Cell::new(0),
            open: IndexSet::new(),
        }
    }

    pub fn base(&self) -> &Folder {
        &self.base
    }

    pub fn journal(&self) -> &MutationJournal {
        &self.journal
    }

    /// Journal version; changes after every successful write.
    pub fn version(&self) -> u64 {
        self.journal.version()
    }

    /// How many times the view has been recomputed.
    pub fn materializations(&self) -> u64 {
        self.materializations.get()
    }

    /// Current view, recomputed only after a journal write.
    pub fn view(&self) -> &MaterializedView {
        self.view.get_or_init(|| {
            self.materializations.set(self.materializations.get() + 1);
            debug!(version = self.journal.version(), "materializing view");
            materialize(&self.base, &self.journal)
        })
    }

    pub fn tree(&self) -> &Folder {
        &self.view().root
    }

    pub fn files(&self) -> &[FlatFile] {
        &self.view().files
    }

    pub fn lookup(&self, path: &VfsPath) -> Option<EntryRef<'_>> {
        lookup(self.tree(), path)
    }

    pub fn exists(&self, path: &VfsPath) -> bool {
        self.lookup(path).is_some()
    }

    /// Convenience lookup in the flat list: exact key, then
    /// case-insensitive key, then a unique case-insensitive file name.
    pub fn find_file(&self, name: &str) -> Option<&FlatFile> {
        let path = VfsPath::parse(name);
        let files = self.files();
        if let Some(file) = files.iter().find(|f| f.path == path) {
            return Some(file);
        }

        let wanted = path.to_key().to_lowercase();
        if let Some(file) = files.iter().find(|f| f.key().to_lowercase() == wanted) {
            return Some(file);
        }

        let mut by_name = files.iter().filter(|f| f.name().to_lowercase() == wanted);
        match (by_name.next(), by_name.next()) {
            (Some(file), None) => Some(file),
            _ => None,
        }
    }

    /// Mark a file open and return its key, or `None` if absent.
    pub fn open_file(&mut self, name: &str) -> Option<String> {
        let path = self.find_file(name)?.path.clone();
        let key = path.to_key();
        debug!(path = %path, "open file");
        self.open.insert(path);
        Some(key)
    }

    pub fn close_file(&mut self, name: &str) -> bool {
        self.open.shift_remove(&VfsPath::parse(name))
    }

    pub fn is_open(&self, path: &VfsPath) -> bool {
        self.open.contains(path)
    }

    pub fn open_files(&self) -> impl Iterator<Item = &VfsPath> {
        self.open.iter()
    }

    /// Read content by exact path.
    pub fn read_file(&self, name: &str) -> Option<&str> {
        let path = VfsPath::parse(name);
        self.files().iter().find(|f| f.path == path).map(|f| f.content.as_str())
    }

    /// Create (or replace) a file. Parent folders are synthesized by the
    /// materializer but not recorded.
    pub fn create_file(&mut self, name: &str, content: &str) -> Result<File, FsError> {
        let path = VfsPath::parse(name);
        self.check_creatable_file(&path, "create")?;
        Ok(self.write_created(path, content))
    }

    /// Create a file and record every missing parent as an explicit folder,
    /// so the folders survive when the file is deleted.
    pub fn create_file_with_path(&mut self, name: &str, content: &str) -> Result<File, FsError> {
        let path = VfsPath::parse(name);
        self.check_creatable_file(&path, "create")?;
        let missing: Vec<VfsPath> = path.ancestors().into_iter().filter(|a| !self.exists(a)).collect();
        for ancestor in missing {
            self.journal.record_folder(ancestor);
        }
        Ok(self.write_created(path, content))
    }

    /// Replace the content of an existing file.
    pub fn update_file(&mut self, name: &str, content: &str) -> Result<(), FsError> {
        let path = VfsPath::parse(name);
        match self.lookup(&path) {
            Some(EntryRef::File(_)) => {}
            Some(EntryRef::Folder(_)) => return Err(FsError::is_directory(&path, "write")),
            None => return Err(FsError::not_found(&path, "write")),
        }
        debug!(path = %path, "update file");
        self.journal.record_modify(path, content);
        self.invalidate();
        Ok(())
    }

    pub fn delete_file(&mut self, name: &str) -> Result<(), FsError> {
        let path = VfsPath::parse(name);
        match self.lookup(&path) {
            Some(EntryRef::File(_)) => {}
            Some(EntryRef::Folder(_)) => return Err(FsError::is_directory(&path, "unlink")),
            None => return Err(FsError::not_found(&path, "unlink")),
        }
        debug!(path = %path, "delete file");
        self.open.shift_remove(&path);
        self.journal.record_delete(path);
        self.invalidate();
        Ok(())
    }

    pub fn create_folder(&mut self, name: &str) -> Result<(), FsError> {
        let path = VfsPath::parse(name);
        if path.is_root() || self.exists(&path) {
            return Err(FsError::already_exists(&path, "mkdir"));
        }
        self.check_ancestors(&path, "mkdir")?;
        debug!(path = %path, "create folder");
        self.journal.record_folder(path);
        self.invalidate();
        Ok(())
    }

    /// Delete a folder and everything beneath it, closing open handles.
    pub fn delete_folder(&mut self, name: &str) -> Result<(), FsError> {
        let path = VfsPath::parse(name);
        if path.is_root() {
            return Err(FsError::invalid_path(&path, "rmdir"));
        }
        let descendants = match self.lookup(&path) {
            Some(EntryRef::Folder(folder)) => {
                let mut out = Vec::new();
                collect_descendants(folder, &path, &mut out);
                out
            }
            Some(EntryRef::File(_)) => return Err(FsError::not_directory(&path, "rmdir")),
            None => return Err(FsError::not_found(&path, "rmdir")),
        };
        debug!(path = %path, descendants = descendants.len(), "delete folder");
        self.open.retain(|open| !open.starts_with(&path));
        self.journal.record_delete_tree(path, descendants);
        self.invalidate();
        Ok(())
    }

    /// Immediate children of a folder; folder names end with `/`.
    pub fn list_directory(&self, name: &str) -> Result<Vec<String>, FsError> {
        let path = VfsPath::parse(name);
        match self.lookup(&path) {
            Some(EntryRef::Folder(folder)) => Ok(folder
                .children
                .iter()
                .map(|c| if c.is_folder() { format!("{}/", c.name()) } else { c.name().to_string() })
                .collect()),
            Some(EntryRef::File(_)) => Err(FsError::not_directory(&path, "scandir")),
            None => Err(FsError::not_found(&path, "scandir")),
        }
    }

    /// Files that differ from the base tree, current order first, then
    /// deletions in base order.
    pub fn changes(&self) -> Vec<Change> {
        let original = flatten(&self.base, &MutationJournal::new());
        let current = self.files();

        let mut changes: Vec<Change> = current
            .iter()
            .filter_map(|file| match original.iter().find(|o| o.path == file.path) {
                None => Some(Change {
                    path: file.path.clone(),
                    kind: ChangeKind::Added,
                    original: None,
                    current: Some(file.content.clone()),
                }),
                Some(o) if o.content != file.content => Some(Change {
                    path: file.path.clone(),
                    kind: ChangeKind::Modified,
                    original: Some(o.content.clone()),
                    current: Some(file.content.clone()),
                }),
                Some(_) => None,
            })
            .collect();

        changes.extend(original.into_iter().filter(|o| !current.iter().any(|f| f.path == o.path)).map(
            |o| Change { path: o.path, kind: ChangeKind::Deleted, original: Some(o.content), current: None },
        ));
        changes
    }

    fn write_created(&mut self, path: VfsPath, content: &str) -> File {
        let name = path.file_name().unwrap_or_default().to_string();
        let kind = file_kind(&name);
        debug!(path = %path, bytes = content.len(), "create file");
        self.journal.record_create(path, kind, content);
        self.invalidate();
        File { name, kind: kind.to_string(), content: content.to_string(), is_open: false }
    }

    fn check_creatable_file(&self, path: &VfsPath, operation: &str) -> Result<(), FsError> {
        if path.is_root() {
            return Err(FsError::invalid_path(path, operation));
        }
        if let Some(EntryRef::Folder(_)) = self.lookup(path) {
            return Err(FsError::is_directory(path, operation));
        }
        self.check_ancestors(path, operation)
    }

    fn check_ancestors(&self, path: &VfsPath, operation: &str) -> Result<(), FsError> {
        for ancestor in path.ancestors() {
            if let Some(EntryRef::File(_)) = self.lookup(&ancestor) {
                return Err(FsError::not_directory(&ancestor, operation));
            }
        }
        Ok(())
    }

    fn invalidate(&mut self) {
        self.view.take();
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new(Folder::new(""))
    }
}

fn collect_descendants(folder: &Folder, path: &VfsPath, out: &mut Vec<VfsPath>) {
    for child in &folder.children {
        let child_path = path.join(child.name());
        if let EntryRef::Folder(f) = child.as_entry_ref() {
            collect_descendants(f, &child_path, out);
        }
        out.push(child_path);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::types::Entity;

    fn make_fs() -> VirtualFs {
        VirtualFs::new(Folder::with_children(
            "",
            vec![
                Entity::File(File::new("README.md", "# Portfolio")),
                Entity::Folder(Folder::with_children(
                    "docs",
                    vec![
                        Entity::File(File::new("Guide.md", "guide")),
                        Entity::Folder(Folder::with_children(
                            "api",
                            vec![Entity::File(File::new("index.md", "api"))],
                        )),
                    ],
                )),
            ],
        ))
    }

    #[test]
    fn test_scenario_create_with_path_then_list() {
        let mut fs = VirtualFs::default();
        fs.create_file_with_path("src/lib/util.ts", "export {}").unwrap();
        assert_eq!(fs.list_directory("src").unwrap(), vec!["lib/"]);
        assert_eq!(fs.list_directory("src/lib").unwrap(), vec!["util.ts"]);
        assert_eq!(fs.read_file("src/lib/util.ts"), Some("export {}"));
    }

    #[test]
    fn test_parents_survive_file_deletion() {
        let mut fs = VirtualFs::default();
        fs.create_file_with_path("src/lib/util.ts", "export {}").unwrap();
        fs.delete_file("src/lib/util.ts").unwrap();
        assert_eq!(fs.list_directory("src/lib").unwrap(), Vec::<String>::new());

        let mut plain = VirtualFs::default();
        plain.create_file("src/lib/util.ts", "export {}").unwrap();
        plain.delete_file("src/lib/util.ts").unwrap();
        assert!(plain.list_directory("src").is_err());
    }

    #[test]
    fn test_delete_create_round_trip() {
        let mut fs = make_fs();
        fs.delete_file("README.md").unwrap();
        assert_eq!(fs.read_file("README.md"), None);

        fs.create_file("README.md", "x").unwrap();
        assert_eq!(fs.read_file("README.md"), Some("x"));
        assert!(!fs.journal().is_deleted(&VfsPath::parse("README.md")));
    }

    #[test]
    fn test_view_is_memoized_until_write() {
        let fs = make_fs();
        let first = fs.view().clone();
        let _ = fs.files();
        let _ = fs.tree();
        assert_eq!(fs.materializations(), 1);
        assert_eq!(&first, fs.view());

        let mut fs = fs;
        fs.update_file("README.md", "# Edited").unwrap();
        assert_eq!(fs.read_file("README.md"), Some("# Edited"));
        assert_eq!(fs.materializations(), 2);
    }

    #[test]
    fn test_failed_write_does_not_bump_version() {
        let mut fs = make_fs();
        let version = fs.version();
        assert!(fs.delete_file("missing.md").is_err());
        assert!(fs.update_file("docs", "x").is_err());
        assert_eq!(fs.version(), version);
    }

    #[test]
    fn test_open_file_case_insensitive_fallback() {
        let mut fs = make_fs();
        assert_eq!(fs.open_file("docs/Guide.md"), Some("docs/Guide.md".to_string()));
        assert_eq!(fs.open_file("DOCS/guide.md"), Some("docs/Guide.md".to_string()));
        assert_eq!(fs.open_file("readme.md"), Some("README.md".to_string()));
        assert_eq!(fs.open_file("index.md"), Some("docs/api/index.md".to_string()));
        assert_eq!(fs.open_file("nope.md"), None);
        assert_eq!(fs.open_files().count(), 3);
    }

    #[test]
    fn test_close_file_removes_handle() {
        let mut fs = make_fs();
        fs.open_file("README.md");
        fs.open_file("docs/Guide.md");
        assert!(fs.close_file("README.md"));
        assert!(!fs.is_open(&VfsPath::parse("README.md")));
        assert_eq!(fs.open_files().cloned().collect::<Vec<_>>(), vec![VfsPath::parse("docs/Guide.md")]);
        // already closed
        assert!(!fs.close_file("README.md"));
        assert!(fs.close_file("/docs/Guide.md"));
        assert_eq!(fs.open_files().count(), 0);
    }

    #[test]
    fn test_read_file_is_exact() {
        let fs = make_fs();
        assert_eq!(fs.read_file("docs/Guide.md"), Some("guide"));
        assert_eq!(fs.read_file("docs/guide.md"), None);
    }

    #[test]
    fn test_delete_folder_cascades() {
        let mut fs = make_fs();
        fs.create_file("docs/new.md", "new").unwrap();
        fs.open_file("docs/api/index.md");
        fs.open_file("README.md");

        fs.delete_folder("docs").unwrap();
        assert!(fs.lookup(&VfsPath::parse("docs")).is_none());
        assert_eq!(fs.files().len(), 1);
        assert_eq!(fs.open_files().cloned().collect::<Vec<_>>(), vec![VfsPath::parse("README.md")]);

        fs.create_folder("docs").unwrap();
        assert_eq!(fs.list_directory("docs").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_conflicts_are_rejected() {
        let mut fs = make_fs();
        assert!(matches!(fs.create_folder("README.md"), Err(FsError::AlreadyExists { .. })));
        assert!(matches!(fs.create_file("docs", "x"), Err(FsError::IsDirectory { .. })));
        assert!(matches!(fs.create_file("README.md/x", "x"), Err(FsError::NotDirectory { .. })));
        assert!(matches!(fs.create_folder("docs"), Err(FsError::AlreadyExists { .. })));
        assert!(matches!(fs.delete_folder("README.md"), Err(FsError::NotDirectory { .. })));
        assert!(matches!(fs.delete_file("docs"), Err(FsError::IsDirectory { .. })));
    }

    #[test]
    fn test_list_directory_marks_folders() {
        let fs = make_fs();
        assert_eq!(fs.list_directory("/").unwrap(), vec!["README.md", "docs/"]);
        assert_eq!(fs.list_directory("docs").unwrap(), vec!["Guide.md", "api/"]);
        assert!(fs.list_directory("README.md").is_err());
    }

    #[test]
    fn test_changes_against_base() {
        let mut fs = make_fs();
        fs.update_file("README.md", "# Edited").unwrap();
        fs.create_file("notes.txt", "n").unwrap();
        fs.delete_file("docs/Guide.md").unwrap();

        let changes = fs.changes();
        let kinds: Vec<(String, ChangeKind)> = changes.iter().map(|c| (c.path.to_key(), c.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("README.md".to_string(), ChangeKind::Modified),
                ("notes.txt".to_string(), ChangeKind::Added),
                ("docs/Guide.md".to_string(), ChangeKind::Deleted),
            ]
        );
    }
}
