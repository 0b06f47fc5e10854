// src/commands/mod.rs
pub mod alias_cmd;
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod curl;
pub mod date;
pub mod echo;
pub mod env;
pub mod export_cmd;
pub mod find;
pub mod git_cmd;
pub mod grep;
pub mod head;
pub mod help_cmd;
pub mod history_cmd;
pub mod hostname_cmd;
pub mod ls;
pub mod man_cmd;
pub mod mkdir;
pub mod node_cmd;
pub mod novelty;
pub mod npm_cmd;
pub mod open_cmd;
pub mod ping_cmd;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod tail;
pub mod touch;
pub mod tree_cmd;
pub mod types;
pub mod unalias_cmd;
pub mod uname_cmd;
pub mod uptime_cmd;
pub mod utils;
pub mod wc;
pub mod which_cmd;
pub mod whoami_cmd;

pub use registry::{Builtin, CommandRegistry};
pub use types::{Command, CommandContext, HostEffect};
