use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn description(&self) -> &'static str {
        "Print the current user"
    }

    fn usage(&self) -> &'static str {
        "whoami"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        vec![OutputLine::output(ctx.user().to_string())]
    }
}
