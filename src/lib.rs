//! folio-shell - A simulated shell over an in-memory document tree
//!
//! This library provides a copy-on-write virtual filesystem, a line-oriented
//! command interpreter with aliases, history and autocomplete, and a search
//! engine over the flattened file list.

pub mod arithmetic;
pub mod commands;
pub mod config;
pub mod fs;
pub mod interpreter;
pub mod output;
pub mod search;
pub mod shell;

pub use commands::{Builtin, Command, CommandContext, CommandRegistry, HostEffect};
pub use config::{ConfigError, ShellConfig};
pub use fs::{Change, ChangeKind, Entity, File, Folder, FsError, VfsPath, VirtualFs};
pub use interpreter::HistoryDirection;
pub use output::{BufferSink, OutputKind, OutputLine, OutputSink, SinkRegistration};
pub use search::{search, SearchOptions, SearchResult};
pub use shell::{Prompt, Shell, ShellOptions};
