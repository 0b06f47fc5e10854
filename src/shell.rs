//! Shell Session
//!
//! Ties together the virtual filesystem, the command registry and the
//! line-level interpreter. A `Shell` owns all session state and runs one
//! submitted line to completion before returning.

use std::rc::Rc;

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::{Builtin, Command, CommandContext, CommandRegistry, HostEffect};
use crate::config::ShellConfig;
use crate::fs::seed::default_tree;
use crate::fs::{resolve, EntryRef, Folder, VfsPath, VirtualFs};
use crate::interpreter::{self, fallback, History, HistoryDirection};
use crate::output::{OutputLine, OutputSink, OutputSinks, SinkRegistration};

/// Options for creating a shell session.
#[derive(Default)]
pub struct ShellOptions {
    pub config: ShellConfig,
    /// Base tree (defaults to the portfolio seed tree)
    pub tree: Option<Folder>,
    /// Initial working directory (defaults to the configured home)
    pub cwd: Option<String>,
    /// Command registry (defaults to builtins plus novelty commands)
    pub registry: Option<CommandRegistry>,
}

/// What the presentation layer shows before the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub path: String,
    pub user: String,
}

pub struct Shell {
    config: ShellConfig,
    fs: VirtualFs,
    cwd: VfsPath,
    env: IndexMap<String, String>,
    aliases: IndexMap<String, String>,
    history: History,
    registry: CommandRegistry,
    buffer: Vec<OutputLine>,
    effects: Vec<HostEffect>,
    sinks: OutputSinks,
    started_at: DateTime<Local>,
}

impl Shell {
    pub fn new(options: ShellOptions) -> Self {
        let ShellOptions { config, tree, cwd, registry } = options;
        let fs = VirtualFs::new(tree.unwrap_or_else(default_tree));

        let requested = cwd.unwrap_or_else(|| config.home.clone());
        let cwd = match fs.lookup(&resolve(&VfsPath::root(), &requested)) {
            Some(EntryRef::Folder(_)) => resolve(&VfsPath::root(), &requested),
            _ => {
                warn!(cwd = %requested, "initial directory is not a folder, starting at /");
                VfsPath::root()
            }
        };

        let mut env = config.environment();
        env.insert("PWD".to_string(), cwd.to_string());

        Self {
            aliases: config.alias_table(),
            env,
            fs,
            cwd,
            history: History::new(),
            registry: registry.unwrap_or_else(CommandRegistry::with_defaults),
            buffer: Vec::new(),
            effects: Vec::new(),
            sinks: OutputSinks::new(),
            started_at: Local::now(),
            config,
        }
    }

    /// Run one line and return the lines it produced. The same lines, led
    /// by an echo of the input, are appended to the output buffer.
    #[tracing::instrument(level = "debug", skip(self), fields(cwd = %self.cwd))]
    pub fn execute_command(&mut self, raw: &str) -> Vec<OutputLine> {
        let line = raw.trim();
        if line.is_empty() {
            return Vec::new();
        }

        self.history.push(line);

        let words = interpreter::split_words(line, &self.env);
        let mut words = interpreter::expand_alias(words, &self.aliases, &self.env).into_iter();
        let Some(name) = words.next() else {
            // Everything expanded away, e.g. `$UNSET`.
            self.append(OutputLine::command(line));
            return Vec::new();
        };
        let args: Vec<String> = words.collect();

        if name == "clear" || name == "cls" {
            debug!("clearing output buffer");
            self.buffer.clear();
            self.effects.push(HostEffect::ClearScreen);
            return Vec::new();
        }

        let produced = match self.invoke(&name, args) {
            Some(lines) => lines,
            None => {
                debug!(command = %name, "no such command, using fallback");
                fallback::respond(line)
            }
        };

        self.append(OutputLine::command(line));
        for output in &produced {
            self.append(output.clone());
        }
        produced
    }

    /// Run `name` if the registry knows it. `history` always reaches the
    /// builtin, whatever the open table holds.
    fn invoke(&mut self, name: &str, args: Vec<String>) -> Option<Vec<OutputLine>> {
        let cmd = if name == "history" { Builtin::History.command() } else { self.registry.get(name)? };
        debug!(command = cmd.name(), args = ?args, "dispatch");
        let mut ctx = CommandContext {
            args,
            cwd: &mut self.cwd,
            fs: &mut self.fs,
            env: &mut self.env,
            aliases: &mut self.aliases,
            history: &mut self.history,
            registry: &self.registry,
            config: &self.config,
            started_at: self.started_at,
            now: Local::now(),
            effects: &mut self.effects,
        };
        Some(cmd.execute(&mut ctx))
    }

    fn append(&mut self, line: OutputLine) {
        self.sinks.emit(&line);
        self.buffer.push(line);
    }

    pub fn navigate_history(&mut self, direction: HistoryDirection) -> String {
        self.history.navigate(direction)
    }

    pub fn get_command_suggestions(&self, prefix: &str) -> Vec<String> {
        interpreter::command_suggestions(prefix, &self.registry, &self.aliases)
    }

    /// Entries under `cwd` (a path string) matching `prefix`.
    pub fn get_file_suggestions(&self, prefix: &str, cwd: &str) -> Vec<String> {
        let dir = resolve(&self.cwd, cwd);
        interpreter::file_suggestions(prefix, &dir, &self.fs)
    }

    /// Suggestions for a partially typed line.
    pub fn suggest(&self, input: &str) -> Vec<String> {
        interpreter::suggest(input, &self.cwd, &self.fs, &self.registry, &self.aliases)
    }

    pub fn get_prompt(&self) -> Prompt {
        let user = self.env.get("USER").cloned().unwrap_or_else(|| self.config.user.clone());
        Prompt { path: self.cwd.to_string(), user }
    }

    /// Drain pending host effects.
    pub fn take_effects(&mut self) -> Vec<HostEffect> {
        std::mem::take(&mut self.effects)
    }

    #[must_use = "the sink is removed as soon as the registration is dropped"]
    pub fn install_sink(&self, sink: Rc<dyn OutputSink>) -> SinkRegistration {
        self.sinks.install(sink)
    }

    /// Add a command to the open table.
    pub fn register_command(&mut self, cmd: Box<dyn Command>) {
        self.registry.register(cmd);
    }

    pub fn output(&self) -> &[OutputLine] {
        &self.buffer
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut VirtualFs {
        &mut self.fs
    }

    pub fn cwd(&self) -> &VfsPath {
        &self.cwd
    }

    pub fn env(&self) -> &IndexMap<String, String> {
        &self.env
    }

    pub fn aliases(&self) -> &IndexMap<String, String> {
        &self.aliases
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
