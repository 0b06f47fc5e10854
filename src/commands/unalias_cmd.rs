use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct UnaliasCommand;

impl Command for UnaliasCommand {
    fn name(&self) -> &'static str {
        "unalias"
    }

    fn description(&self) -> &'static str {
        "Remove aliases"
    }

    fn usage(&self) -> &'static str {
        "unalias [-a] name [name ...]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![
                OutputLine::output("unalias - remove alias definitions"),
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("  -a    remove all alias definitions"),
            ];
        }

        if ctx.args.is_empty() {
            return vec![OutputLine::error(format!("unalias: usage: {}", self.usage()))];
        }

        if ctx.args.iter().any(|a| a == "-a") {
            ctx.aliases.clear();
            return Vec::new();
        }

        let mut out = Vec::new();
        for name in &ctx.args {
            if ctx.aliases.shift_remove(name).is_none() {
                out.push(OutputLine::error(format!("unalias: {}: not found", name)));
            }
        }
        out
    }
}
