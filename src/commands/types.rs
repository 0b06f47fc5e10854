// src/commands/types.rs
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;

use crate::config::ShellConfig;
use crate::fs::{resolve, EntryRef, FsError, VfsPath, VirtualFs};
use crate::interpreter::history::History;
use crate::output::OutputLine;

use super::registry::CommandRegistry;

/// Out-of-band request for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "target", rename_all = "camelCase")]
pub enum HostEffect {
    /// Show a file in the editor, by key.
    OpenFile(String),
    /// Start an arcade game, by name.
    LaunchGame(String),
    ClearScreen,
}

/// 命令执行上下文
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub cwd: &'a mut VfsPath,
    pub fs: &'a mut VirtualFs,
    pub env: &'a mut IndexMap<String, String>,
    pub aliases: &'a mut IndexMap<String, String>,
    pub history: &'a mut History,
    pub registry: &'a CommandRegistry,
    pub config: &'a ShellConfig,
    pub started_at: DateTime<Local>,
    pub now: DateTime<Local>,
    pub effects: &'a mut Vec<HostEffect>,
}

impl CommandContext<'_> {
    /// Resolve an argument against the working directory.
    pub fn resolve(&self, target: &str) -> VfsPath {
        resolve(self.cwd, target)
    }

    pub fn user(&self) -> &str {
        self.env.get("USER").map(|s| s.as_str()).unwrap_or(self.config.user.as_str())
    }

    pub fn wants_help(&self) -> bool {
        self.args.iter().any(|a| a == "--help")
    }

    /// Read a file argument, resolved against the working directory.
    pub fn read_text(&self, target: &str) -> Result<String, FsError> {
        let path = self.resolve(target);
        match self.fs.lookup(&path) {
            Some(EntryRef::File(file)) => Ok(file.content.clone()),
            Some(EntryRef::Folder(_)) => Err(FsError::is_directory(&path, "read")),
            None => Err(FsError::not_found(&path, "open")),
        }
    }

    /// Open a file in the host. The argument is tried against the working
    /// directory first, then as a loose name.
    pub fn open_file(&mut self, target: &str) -> Option<String> {
        let resolved = self.resolve(target).to_key();
        let key = self.fs.open_file(&resolved).or_else(|| self.fs.open_file(target))?;
        self.effects.push(HostEffect::OpenFile(key.clone()));
        Some(key)
    }
}

/// `cmd: arg: reason`, the usual shell phrasing for a failed operand.
pub fn operand_error(cmd: &str, operand: &str, err: &FsError) -> OutputLine {
    OutputLine::error(format!("{}: {}: {}", cmd, operand, err.reason()))
}

/// 命令 trait
pub trait Command {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn usage(&self) -> &'static str;
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine>;
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Context fixture shared by the command tests.

    use chrono::TimeZone;

    use super::*;
    use crate::fs::seed::default_tree;

    pub struct Fixture {
        pub cwd: VfsPath,
        pub fs: VirtualFs,
        pub env: IndexMap<String, String>,
        pub aliases: IndexMap<String, String>,
        pub history: History,
        pub registry: CommandRegistry,
        pub config: ShellConfig,
        pub effects: Vec<HostEffect>,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self::with_fs(VirtualFs::new(default_tree()))
        }

        pub fn with_fs(fs: VirtualFs) -> Self {
            let config = ShellConfig::default();
            Self {
                cwd: VfsPath::root(),
                fs,
                env: config.environment(),
                aliases: config.alias_table(),
                history: History::new(),
                registry: CommandRegistry::with_defaults(),
                config,
                effects: Vec::new(),
            }
        }

        pub fn run(&mut self, cmd: &dyn Command, args: &[&str]) -> Vec<OutputLine> {
            let started_at = Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().unwrap_or_else(Local::now);
            let mut ctx = CommandContext {
                args: args.iter().map(|s| s.to_string()).collect(),
                cwd: &mut self.cwd,
                fs: &mut self.fs,
                env: &mut self.env,
                aliases: &mut self.aliases,
                history: &mut self.history,
                registry: &self.registry,
                config: &self.config,
                started_at,
                now: started_at + chrono::Duration::minutes(95),
                effects: &mut self.effects,
            };
            cmd.execute(&mut ctx)
        }
    }

    pub fn texts(lines: &[OutputLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }
}
