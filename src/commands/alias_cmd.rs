use tracing::debug;

use crate::commands::{Command, CommandContext};
use crate::interpreter::alias_expansion::is_valid_alias_name;
use crate::output::OutputLine;

pub struct AliasCommand;

fn render(name: &str, value: &str) -> OutputLine {
    OutputLine::output(format!("alias {}='{}'", name, value))
}

impl Command for AliasCommand {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn description(&self) -> &'static str {
        "Define or display aliases"
    }

    fn usage(&self) -> &'static str {
        "alias [name[=value] ...]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![OutputLine::output("alias - define or display aliases"), OutputLine::output(format!("Usage: {}", self.usage()))];
        }

        if ctx.args.is_empty() {
            return ctx.aliases.iter().map(|(name, value)| render(name, value)).collect();
        }

        let args: Vec<String> = match ctx.args.first().map(String::as_str) {
            Some("--") => ctx.args[1..].to_vec(),
            _ => ctx.args.clone(),
        };

        let mut out = Vec::new();
        for arg in args {
            match arg.split_once('=') {
                Some((name, value)) => {
                    if !is_valid_alias_name(name) {
                        out.push(OutputLine::error(format!("alias: `{}': invalid alias name", name)));
                        continue;
                    }
                    debug!(name, value, "define alias");
                    ctx.aliases.insert(name.to_string(), value.to_string());
                }
                None => match ctx.aliases.get(&arg) {
                    Some(value) => out.push(render(&arg, value)),
                    None => out.push(OutputLine::error(format!("alias: {}: not found", arg))),
                },
            }
        }
        out
    }
}
