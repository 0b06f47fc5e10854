//! Mutation Journal
//!
//! Copy-on-write overlays recorded on top of the immutable base tree:
//! tombstones, created files, created folders and content modifications.
//! The base tree is never touched; every write bumps `version` so the
//! materialized view knows it is stale.

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use super::path::VfsPath;

/// A file added after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFile {
    pub path: VfsPath,
    pub kind: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct MutationJournal {
    deleted: IndexSet<VfsPath>,
    created: Vec<CreatedFile>,
    created_folders: IndexSet<VfsPath>,
    modified: IndexMap<VfsPath, String>,
    version: u64,
}

impl MutationJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
            && self.created.is_empty()
            && self.created_folders.is_empty()
            && self.modified.is_empty()
    }

    /// Exact tombstone check.
    pub fn is_deleted(&self, path: &VfsPath) -> bool {
        self.deleted.contains(path)
    }

    /// True if `path` or any of its ancestors is tombstoned.
    pub fn is_hidden(&self, path: &VfsPath) -> bool {
        self.is_deleted(path) || path.ancestors().iter().any(|a| self.deleted.contains(a))
    }

    pub fn deleted(&self) -> impl Iterator<Item = &VfsPath> {
        self.deleted.iter()
    }

    pub fn created(&self) -> &[CreatedFile] {
        &self.created
    }

    pub fn created_folders(&self) -> impl Iterator<Item = &VfsPath> {
        self.created_folders.iter()
    }

    pub fn modified_content(&self, path: &VfsPath) -> Option<&str> {
        self.modified.get(path).map(|s| s.as_str())
    }

    /// Record a new file, replacing any created file at the same path.
    ///
    /// The path and its ancestors are un-tombstoned first, and a pending
    /// modification is dropped so the new content is what reads back.
    pub fn record_create(&mut self, path: VfsPath, kind: impl Into<String>, content: impl Into<String>) {
        self.untombstone(&path);
        self.modified.shift_remove(&path);
        self.created.retain(|c| c.path != path);
        trace!(path = %path, "journal: create");
        self.created.push(CreatedFile { path, kind: kind.into(), content: content.into() });
        self.bump();
    }

    /// Record replacement content for an existing base or created file.
    pub fn record_modify(&mut self, path: VfsPath, content: impl Into<String>) {
        trace!(path = %path, "journal: modify");
        self.modified.insert(path, content.into());
        self.bump();
    }

    /// Delete a file: clear its modification, drop it from the created
    /// list, then tombstone it. The order matters for re-creation.
    pub fn record_delete(&mut self, path: VfsPath) {
        self.modified.shift_remove(&path);
        self.created.retain(|c| c.path != path);
        trace!(path = %path, "journal: delete");
        self.deleted.insert(path);
        self.bump();
    }

    /// Record an explicit folder, materialized even when empty.
    pub fn record_folder(&mut self, path: VfsPath) {
        self.untombstone(&path);
        trace!(path = %path, "journal: create folder");
        self.created_folders.insert(path);
        self.bump();
    }

    /// Delete a folder and everything recorded beneath it. `descendants`
    /// are the folder's current file and folder paths, tombstoned one by
    /// one so that re-creating the folder later starts out empty.
    pub fn record_delete_tree(&mut self, root: VfsPath, descendants: Vec<VfsPath>) {
        self.modified.retain(|path, _| !path.starts_with(&root));
        self.created.retain(|c| !c.path.starts_with(&root));
        self.created_folders.retain(|path| !path.starts_with(&root));
        trace!(path = %root, count = descendants.len(), "journal: delete tree");
        self.deleted.extend(descendants);
        self.deleted.insert(root);
        self.bump();
    }

    fn untombstone(&mut self, path: &VfsPath) {
        self.deleted.shift_remove(path);
        for ancestor in path.ancestors() {
            self.deleted.shift_remove(&ancestor);
        }
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> VfsPath {
        VfsPath::parse(s)
    }

    #[test]
    fn test_new_journal_is_empty() {
        let journal = MutationJournal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.version(), 0);
    }

    #[test]
    fn test_every_write_bumps_version() {
        let mut journal = MutationJournal::new();
        journal.record_create(p("a.md"), "markdown", "x");
        journal.record_modify(p("a.md"), "y");
        journal.record_folder(p("docs"));
        journal.record_delete(p("a.md"));
        assert_eq!(journal.version(), 4);
    }

    #[test]
    fn test_create_replaces_same_path() {
        let mut journal = MutationJournal::new();
        journal.record_create(p("a.md"), "markdown", "one");
        journal.record_create(p("a.md"), "markdown", "two");
        assert_eq!(journal.created().len(), 1);
        assert_eq!(journal.created()[0].content, "two");
    }

    #[test]
    fn test_delete_then_create_untombstones() {
        let mut journal = MutationJournal::new();
        journal.record_create(p("a.md"), "markdown", "one");
        journal.record_modify(p("a.md"), "edited");
        journal.record_delete(p("a.md"));
        assert!(journal.is_deleted(&p("a.md")));
        assert!(journal.created().is_empty());
        assert!(journal.modified_content(&p("a.md")).is_none());

        journal.record_create(p("a.md"), "markdown", "x");
        assert!(!journal.is_deleted(&p("a.md")));
        assert_eq!(journal.created()[0].content, "x");
    }

    #[test]
    fn test_create_clears_pending_modification() {
        let mut journal = MutationJournal::new();
        journal.record_modify(p("README.md"), "edited");
        journal.record_create(p("README.md"), "markdown", "fresh");
        assert!(journal.modified_content(&p("README.md")).is_none());
    }

    #[test]
    fn test_hidden_through_ancestor() {
        let mut journal = MutationJournal::new();
        journal.record_delete_tree(p("docs"), vec![p("docs/a.md")]);
        assert!(journal.is_hidden(&p("docs/a.md")));
        assert!(journal.is_hidden(&p("docs/deep/b.md")));
        assert!(!journal.is_hidden(&p("other/a.md")));
    }

    #[test]
    fn test_delete_tree_drops_recorded_descendants() {
        let mut journal = MutationJournal::new();
        journal.record_folder(p("src/lib"));
        journal.record_create(p("src/lib/util.ts"), "typescript", "export {}");
        journal.record_modify(p("src/main.ts"), "edited");
        journal.record_create(p("keep.md"), "markdown", "");

        journal.record_delete_tree(p("src"), vec![p("src/main.ts")]);
        assert_eq!(journal.created().len(), 1);
        assert_eq!(journal.created_folders().count(), 0);
        assert!(journal.modified_content(&p("src/main.ts")).is_none());
        assert!(journal.is_deleted(&p("src")));
        assert!(journal.is_deleted(&p("src/main.ts")));
    }

    #[test]
    fn test_create_under_deleted_folder_reveals_parent() {
        let mut journal = MutationJournal::new();
        journal.record_delete_tree(p("docs"), vec![p("docs/old.md")]);
        journal.record_create(p("docs/new.md"), "markdown", "");
        assert!(!journal.is_hidden(&p("docs/new.md")));
        assert!(journal.is_deleted(&p("docs/old.md")));
    }
}
