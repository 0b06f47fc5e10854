use tracing::debug;

use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct ExportCommand;

pub struct UnsetCommand;

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Command for ExportCommand {
    fn name(&self) -> &'static str {
        "export"
    }

    fn description(&self) -> &'static str {
        "Set environment variables"
    }

    fn usage(&self) -> &'static str {
        "export [NAME=value...]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.args.is_empty() {
            return ctx
                .env
                .iter()
                .map(|(key, value)| OutputLine::output(format!("declare -x {}=\"{}\"", key, value)))
                .collect();
        }

        let mut out = Vec::new();
        for arg in &ctx.args {
            let (name, value) = match arg.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (arg.as_str(), None),
            };
            if !is_valid_name(name) {
                out.push(OutputLine::error(format!("export: `{}': not a valid identifier", arg)));
                continue;
            }
            match value {
                Some(value) => {
                    debug!(name, "export");
                    ctx.env.insert(name.to_string(), value.to_string());
                }
                // export NAME 只确保变量存在
                None => {
                    ctx.env.entry(name.to_string()).or_default();
                }
            }
        }
        out
    }
}

impl Command for UnsetCommand {
    fn name(&self) -> &'static str {
        "unset"
    }

    fn description(&self) -> &'static str {
        "Remove environment variables"
    }

    fn usage(&self) -> &'static str {
        "unset NAME..."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.args.is_empty() {
            return vec![OutputLine::error(format!("usage: {}", self.usage()))];
        }
        for name in &ctx.args {
            ctx.env.shift_remove(name);
        }
        Vec::new()
    }
}
