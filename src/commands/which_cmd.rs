use crate::commands::{Builtin, Command, CommandContext};
use crate::output::OutputLine;

pub struct WhichCommand;

impl Command for WhichCommand {
    fn name(&self) -> &'static str {
        "which"
    }

    fn description(&self) -> &'static str {
        "Locate a command"
    }

    fn usage(&self) -> &'static str {
        "which [-s] command..."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let mut silent = false;
        let mut names = Vec::new();
        for arg in &ctx.args {
            match arg.as_str() {
                "-s" => silent = true,
                _ => names.push(arg.as_str()),
            }
        }

        if names.is_empty() {
            return vec![OutputLine::error(format!("usage: {}", self.usage()))];
        }

        let mut out = Vec::new();
        for name in names {
            let line = if let Some(value) = ctx.aliases.get(name) {
                OutputLine::output(format!("{}: aliased to {}", name, value))
            } else if Builtin::from_name(name).is_some() {
                OutputLine::output(format!("/bin/{}", name))
            } else if ctx.registry.contains(name) {
                OutputLine::output(format!("/usr/games/{}", name))
            } else {
                OutputLine::error(format!("{} not found", name))
            };
            if !silent || line.is_error() {
                out.push(line);
            }
        }
        out
    }
}
