// src/commands/registry.rs
use indexmap::IndexMap;
use tracing::{debug, warn};

use super::types::Command;

use super::alias_cmd::AliasCommand;
use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::curl::CurlCommand;
use super::date::DateCommand;
use super::echo::EchoCommand;
use super::env::EnvCommand;
use super::export_cmd::{ExportCommand, UnsetCommand};
use super::find::FindCommand;
use super::git_cmd::GitCommand;
use super::grep::GrepCommand;
use super::head::HeadCommand;
use super::help_cmd::HelpCommand;
use super::history_cmd::HistoryCommand;
use super::hostname_cmd::HostnameCommand;
use super::ls::LsCommand;
use super::man_cmd::ManCommand;
use super::mkdir::MkdirCommand;
use super::node_cmd::NodeCommand;
use super::novelty;
use super::npm_cmd::NpmCommand;
use super::open_cmd::OpenCommand;
use super::ping_cmd::PingCommand;
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::tail::TailCommand;
use super::touch::TouchCommand;
use super::tree_cmd::TreeCommand;
use super::unalias_cmd::UnaliasCommand;
use super::uname_cmd::UnameCommand;
use super::uptime_cmd::UptimeCommand;
use super::wc::WcCommand;
use super::which_cmd::WhichCommand;
use super::whoami_cmd::WhoamiCommand;

/// The fixed command set. Every variant maps to exactly one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Ls,
    Cd,
    Pwd,
    Tree,
    Find,
    Cat,
    Head,
    Tail,
    Wc,
    Grep,
    Open,
    Touch,
    Mkdir,
    Rm,
    Env,
    Export,
    Unset,
    Echo,
    Alias,
    Unalias,
    History,
    Clear,
    Whoami,
    Date,
    Uptime,
    Hostname,
    Uname,
    Help,
    Man,
    Which,
    Npm,
    Node,
    Git,
    Curl,
    Ping,
}

impl Builtin {
    pub const ALL: [Builtin; 35] = [
        Builtin::Ls,
        Builtin::Cd,
        Builtin::Pwd,
        Builtin::Tree,
        Builtin::Find,
        Builtin::Cat,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Wc,
        Builtin::Grep,
        Builtin::Open,
        Builtin::Touch,
        Builtin::Mkdir,
        Builtin::Rm,
        Builtin::Env,
        Builtin::Export,
        Builtin::Unset,
        Builtin::Echo,
        Builtin::Alias,
        Builtin::Unalias,
        Builtin::History,
        Builtin::Clear,
        Builtin::Whoami,
        Builtin::Date,
        Builtin::Uptime,
        Builtin::Hostname,
        Builtin::Uname,
        Builtin::Help,
        Builtin::Man,
        Builtin::Which,
        Builtin::Npm,
        Builtin::Node,
        Builtin::Git,
        Builtin::Curl,
        Builtin::Ping,
    ];

    pub fn command(self) -> &'static dyn Command {
        match self {
            Builtin::Ls => &LsCommand,
            Builtin::Cd => &CdCommand,
            Builtin::Pwd => &PwdCommand,
            Builtin::Tree => &TreeCommand,
            Builtin::Find => &FindCommand,
            Builtin::Cat => &CatCommand,
            Builtin::Head => &HeadCommand,
            Builtin::Tail => &TailCommand,
            Builtin::Wc => &WcCommand,
            Builtin::Grep => &GrepCommand,
            Builtin::Open => &OpenCommand,
            Builtin::Touch => &TouchCommand,
            Builtin::Mkdir => &MkdirCommand,
            Builtin::Rm => &RmCommand,
            Builtin::Env => &EnvCommand,
            Builtin::Export => &ExportCommand,
            Builtin::Unset => &UnsetCommand,
            Builtin::Echo => &EchoCommand,
            Builtin::Alias => &AliasCommand,
            Builtin::Unalias => &UnaliasCommand,
            Builtin::History => &HistoryCommand,
            Builtin::Clear => &ClearCommand,
            Builtin::Whoami => &WhoamiCommand,
            Builtin::Date => &DateCommand,
            Builtin::Uptime => &UptimeCommand,
            Builtin::Hostname => &HostnameCommand,
            Builtin::Uname => &UnameCommand,
            Builtin::Help => &HelpCommand,
            Builtin::Man => &ManCommand,
            Builtin::Which => &WhichCommand,
            Builtin::Npm => &NpmCommand,
            Builtin::Node => &NodeCommand,
            Builtin::Git => &GitCommand,
            Builtin::Curl => &CurlCommand,
            Builtin::Ping => &PingCommand,
        }
    }

    pub fn name(self) -> &'static str {
        self.command().name()
    }

    pub fn from_name(name: &str) -> Option<Builtin> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }
}

/// Closed builtin table plus an open table for late registrations.
pub struct CommandRegistry {
    extensions: IndexMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Builtins only.
    pub fn new() -> Self {
        Self { extensions: IndexMap::new() }
    }

    /// Builtins plus the novelty commands.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        novelty::register_novelty(&mut registry);
        registry
    }

    /// Add a command to the open table. Builtin names cannot be shadowed.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name();
        if Builtin::from_name(name).is_some() {
            warn!(name, "ignoring registration that shadows a builtin");
            return;
        }
        debug!(name, "registering command");
        self.extensions.insert(name.to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        match Builtin::from_name(name) {
            Some(builtin) => Some(builtin.command()),
            None => self.extensions.get(name).map(|c| c.as_ref()),
        }
    }

    /// Builtin names in table order, then registered names.
    pub fn names(&self) -> Vec<&str> {
        Builtin::ALL
            .iter()
            .map(|b| b.name())
            .chain(self.extensions.keys().map(|s| s.as_str()))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        Builtin::ALL
            .iter()
            .map(|b| b.command())
            .chain(self.extensions.values().map(|c| c.as_ref()))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
