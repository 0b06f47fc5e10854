// src/commands/pwd/mod.rs
use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Print the working directory"
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        vec![OutputLine::output(ctx.cwd.to_string())]
    }
}
