//! File System Module
//!
//! In-memory document tree with copy-on-write layering:
//! - `types`: entities and errors
//! - `path`: canonical path value and resolution
//! - `journal`: overlays recorded on top of the base tree
//! - `materialize`: base + journal -> observable tree and flat list
//! - `virtual_fs`: memoized view and the host-facing contract
//! - `seed`: default base tree and tree loading

pub mod journal;
pub mod materialize;
pub mod path;
pub mod seed;
pub mod types;
pub mod virtual_fs;

pub use journal::MutationJournal;
pub use materialize::{materialize, MaterializedView};
pub use path::{lookup, resolve, VfsPath};
pub use types::*;
pub use virtual_fs::{Change, ChangeKind, VirtualFs};
