//! Path Resolution
//!
//! `VfsPath` is the one canonical path value used by the journal, the
//! materialized tree, the flat file list and open handles. Strings only
//! appear at the boundary (`parse`, `Display`, `to_key`).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{EntryRef, Folder};

/// Absolute path inside the virtual tree, stored as ordered segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct VfsPath {
    segments: Vec<String>,
}

impl VfsPath {
    /// The root path `/`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a path string. Leading slashes are optional; empty and `.`
    /// segments are dropped and `..` pops (never past root).
    pub fn parse(path: &str) -> Self {
        let mut result = Self::root();
        result.push_str(path);
        result
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut result = Self::root();
        for segment in segments {
            result.push_str(&segment.into());
        }
        result
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Last segment, `None` for root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(|s| s.as_str())
    }

    /// Parent path, `None` for root.
    pub fn parent(&self) -> Option<VfsPath> {
        if self.is_root() {
            return None;
        }
        let mut parent = self.clone();
        parent.segments.pop();
        Some(parent)
    }

    /// Append a relative path (which may itself contain `/`, `.` or `..`).
    pub fn join(&self, relative: &str) -> VfsPath {
        let mut joined = self.clone();
        joined.push_str(relative);
        joined
    }

    /// Remove the last segment. Popping root is a no-op.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// True if `self` equals `ancestor` or lies beneath it.
    pub fn starts_with(&self, ancestor: &VfsPath) -> bool {
        self.segments.starts_with(&ancestor.segments)
    }

    /// Proper ancestors from the top down, excluding root and `self`.
    pub fn ancestors(&self) -> Vec<VfsPath> {
        (1..self.segments.len())
            .map(|len| VfsPath { segments: self.segments[..len].to_vec() })
            .collect()
    }

    /// Relative key form used by the flat file list (`src/lib/util.ts`).
    pub fn to_key(&self) -> String {
        self.segments.join("/")
    }

    fn push_str(&mut self, path: &str) {
        for part in path.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    self.segments.pop();
                }
                _ => self.segments.push(part.to_string()),
            }
        }
    }
}

impl fmt::Display for VfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

impl From<String> for VfsPath {
    fn from(s: String) -> Self {
        VfsPath::parse(&s)
    }
}

impl From<&str> for VfsPath {
    fn from(s: &str) -> Self {
        VfsPath::parse(s)
    }
}

impl From<VfsPath> for String {
    fn from(path: VfsPath) -> Self {
        path.to_string()
    }
}

/// Resolve `target` against the working directory `cwd`.
///
/// Rules, in order:
/// - `/...` and `~...` are absolute (`~` is stripped, not replaced by a home directory)
/// - `..` pops one segment
/// - `../rest` pops one segment and resolves `rest` against the result
/// - `.` (or nothing) is `cwd`
/// - anything else is appended to `cwd`
pub fn resolve(cwd: &VfsPath, target: &str) -> VfsPath {
    let target = target.trim();

    if let Some(rest) = target.strip_prefix('~') {
        return VfsPath::parse(rest);
    }
    if target.starts_with('/') {
        return VfsPath::parse(target);
    }
    if target == ".." {
        let mut parent = cwd.clone();
        parent.pop();
        return parent;
    }
    if let Some(rest) = target.strip_prefix("../") {
        let mut parent = cwd.clone();
        parent.pop();
        return resolve(&parent, rest);
    }
    if target == "." || target.is_empty() {
        return cwd.clone();
    }
    cwd.join(target)
}

/// Walk `path` segment by segment through a materialized tree.
///
/// Matching is case-sensitive; every intermediate segment must be a folder.
pub fn lookup<'a>(root: &'a Folder, path: &VfsPath) -> Option<EntryRef<'a>> {
    let mut current = EntryRef::Folder(root);
    for segment in path.segments() {
        let EntryRef::Folder(folder) = current else {
            return None;
        };
        current = folder.child(segment)?.as_entry_ref();
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::types::{Entity, File};

    fn p(s: &str) -> VfsPath {
        VfsPath::parse(s)
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(p("/").to_string(), "/");
        assert_eq!(p("").to_string(), "/");
        assert_eq!(p("src/lib/util.ts").to_string(), "/src/lib/util.ts");
        assert_eq!(p("/a//b/./c/").to_string(), "/a/b/c");
        assert_eq!(p("/a/b/../c").to_string(), "/a/c");
        assert_eq!(p("/../..").to_string(), "/");
    }

    #[test]
    fn test_key_form() {
        assert_eq!(p("/src/lib/util.ts").to_key(), "src/lib/util.ts");
        assert_eq!(VfsPath::root().to_key(), "");
    }

    #[test]
    fn test_parent_and_ancestors() {
        let path = p("/a/b/c");
        assert_eq!(path.parent(), Some(p("/a/b")));
        assert_eq!(VfsPath::root().parent(), None);
        assert_eq!(path.ancestors(), vec![p("/a"), p("/a/b")]);
        assert!(path.starts_with(&p("/a")));
        assert!(path.starts_with(&VfsPath::root()));
        assert!(!p("/ab").starts_with(&p("/a")));
    }

    #[test]
    fn test_resolve_dot_is_cwd() {
        let cwd = p("/a/b");
        assert_eq!(resolve(&cwd, "."), cwd);
        assert_eq!(resolve(&VfsPath::root(), "."), VfsPath::root());
    }

    #[test]
    fn test_resolve_parent() {
        assert_eq!(resolve(&p("/a/b"), ".."), p("/a"));
        assert_eq!(resolve(&p("/a/b"), "../c"), p("/a/c"));
        assert_eq!(resolve(&p("/a/b"), "../../x/y"), p("/x/y"));
    }

    #[test]
    fn test_resolve_absolute_ignores_cwd() {
        assert_eq!(resolve(&p("/a/b"), "/x"), p("/x"));
        assert_eq!(resolve(&VfsPath::root(), "/x"), p("/x"));
        assert_eq!(resolve(&p("/deep/down"), "~/docs"), p("/docs"));
        assert_eq!(resolve(&p("/deep/down"), "~"), VfsPath::root());
    }

    #[test]
    fn test_resolve_parent_of_root_stays_at_root() {
        assert_eq!(resolve(&VfsPath::root(), ".."), VfsPath::root());
        assert_eq!(resolve(&VfsPath::root(), "../../a"), p("/a"));
    }

    #[test]
    fn test_resolve_relative_appends() {
        assert_eq!(resolve(&VfsPath::root(), "docs"), p("/docs"));
        assert_eq!(resolve(&p("/src"), "lib/util.ts"), p("/src/lib/util.ts"));
        assert_eq!(resolve(&p("/src"), "./lib"), p("/src/lib"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut docs = Folder::new("docs");
        docs.children.push(Entity::File(File::new("a.md", "hello")));
        let mut root = Folder::new("");
        root.children.push(Entity::Folder(docs));

        assert!(matches!(lookup(&root, &p("/docs")), Some(EntryRef::Folder(_))));
        assert!(matches!(lookup(&root, &p("/docs/a.md")), Some(EntryRef::File(_))));
        assert!(lookup(&root, &p("/Docs")).is_none());
        assert!(lookup(&root, &p("/docs/a.md/x")).is_none());
        assert!(matches!(lookup(&root, &VfsPath::root()), Some(EntryRef::Folder(_))));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&p("/a/b")).unwrap();
        assert_eq!(json, "\"/a/b\"");
        let back: VfsPath = serde_json::from_str("\"a/b\"").unwrap();
        assert_eq!(back, p("/a/b"));
    }
}
