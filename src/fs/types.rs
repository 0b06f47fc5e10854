//! File System Types
//!
//! Core types for the virtual document tree.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::path::VfsPath;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EEXIST: file already exists, {operation} '{path}'")]
    AlreadyExists { path: String, operation: String },

    #[error("EISDIR: illegal operation on a directory, {operation} '{path}'")]
    IsDirectory { path: String, operation: String },

    #[error("ENOTDIR: not a directory, {operation} '{path}'")]
    NotDirectory { path: String, operation: String },

    #[error("EINVAL: invalid argument, {operation} '{path}'")]
    InvalidPath { path: String, operation: String },
}

impl FsError {
    pub fn not_found(path: &VfsPath, operation: &str) -> Self {
        FsError::NotFound { path: path.to_string(), operation: operation.to_string() }
    }

    pub fn already_exists(path: &VfsPath, operation: &str) -> Self {
        FsError::AlreadyExists { path: path.to_string(), operation: operation.to_string() }
    }

    pub fn is_directory(path: &VfsPath, operation: &str) -> Self {
        FsError::IsDirectory { path: path.to_string(), operation: operation.to_string() }
    }

    pub fn not_directory(path: &VfsPath, operation: &str) -> Self {
        FsError::NotDirectory { path: path.to_string(), operation: operation.to_string() }
    }

    pub fn invalid_path(path: &VfsPath, operation: &str) -> Self {
        FsError::InvalidPath { path: path.to_string(), operation: operation.to_string() }
    }

    /// Shell-style reason phrase, e.g. `No such file or directory`.
    pub fn reason(&self) -> &'static str {
        match self {
            FsError::NotFound { .. } => "No such file or directory",
            FsError::AlreadyExists { .. } => "File exists",
            FsError::IsDirectory { .. } => "Is a directory",
            FsError::NotDirectory { .. } => "Not a directory",
            FsError::InvalidPath { .. } => "Invalid argument",
        }
    }
}

/// A file node. `kind` is a display/highlighting tag only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_open: bool,
}

impl File {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        let kind = file_kind(&name).to_string();
        Self { name, kind, content: content.into(), is_open: false }
    }
}

/// A folder node. Sibling names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub name: String,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub children: Vec<Entity>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_open: false, children: Vec::new() }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<Entity>) -> Self {
        Self { name: name.into(), is_open: false, children }
    }

    pub fn child(&self, name: &str) -> Option<&Entity> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// Insert `entity`, replacing any sibling with the same name in place.
    pub fn insert_or_replace(&mut self, entity: Entity) {
        match self.children.iter_mut().find(|c| c.name() == entity.name()) {
            Some(existing) => *existing = entity,
            None => self.children.push(entity),
        }
    }
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    File(File),
    Folder(Folder),
}

impl Entity {
    pub fn name(&self) -> &str {
        match self {
            Entity::File(f) => &f.name,
            Entity::Folder(f) => &f.name,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Entity::File(_))
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Entity::Folder(_))
    }

    pub fn as_entry_ref(&self) -> EntryRef<'_> {
        match self {
            Entity::File(f) => EntryRef::File(f),
            Entity::Folder(f) => EntryRef::Folder(f),
        }
    }
}

/// Borrowed view of a tree node; the root is always a folder.
#[derive(Debug, Clone, Copy)]
pub enum EntryRef<'a> {
    File(&'a File),
    Folder(&'a Folder),
}

impl<'a> EntryRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            EntryRef::File(f) => &f.name,
            EntryRef::Folder(f) => &f.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, EntryRef::Folder(_))
    }
}

/// Entry of the flat file list, keyed by full path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatFile {
    pub path: VfsPath,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl FlatFile {
    /// Relative key, e.g. `src/lib/util.ts`.
    pub fn key(&self) -> String {
        self.path.to_key()
    }

    pub fn name(&self) -> &str {
        self.path.file_name().unwrap_or_default()
    }
}

/// Content-kind tag derived from a file extension.
pub fn file_kind(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, e)| e.to_ascii_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "ts" | "tsx" => "typescript",
        "js" | "jsx" | "mjs" => "javascript",
        "rs" => "rust",
        "py" => "python",
        "md" | "markdown" => "markdown",
        "json" => "json",
        "toml" => "toml",
        "yaml" | "yml" => "yaml",
        "css" => "css",
        "html" | "htm" => "html",
        "sh" | "bash" => "shell",
        _ => "text",
    }
}

// ============================================================================
// Tests
// ============================================================================
