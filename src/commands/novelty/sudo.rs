use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct SudoCommand;

impl Command for SudoCommand {
    fn name(&self) -> &'static str {
        "sudo"
    }

    fn description(&self) -> &'static str {
        "Execute a command as another user"
    }

    fn usage(&self) -> &'static str {
        "sudo command"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.args.is_empty() {
            return vec![OutputLine::error(format!("usage: {}", self.usage()))];
        }
        vec![OutputLine::error(format!(
            "{} is not in the sudoers file. This incident will be reported.",
            ctx.user()
        ))]
    }
}
