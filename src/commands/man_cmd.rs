use crate::commands::{Builtin, Command, CommandContext};
use crate::output::OutputLine;

pub struct ManCommand;

impl Command for ManCommand {
    fn name(&self) -> &'static str {
        "man"
    }

    fn description(&self) -> &'static str {
        "Show the manual page for a command"
    }

    fn usage(&self) -> &'static str {
        "man command"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let Some(name) = ctx.args.first() else {
            return vec![OutputLine::error("What manual page do you want?")];
        };
        let Some(cmd) = ctx.registry.get(name) else {
            return vec![OutputLine::error(format!("No manual entry for {}", name))];
        };

        let section = if Builtin::from_name(name).is_some() { 1 } else { 6 };
        let header = format!("{}({})", cmd.name().to_uppercase(), section);
        vec![
            OutputLine::output(format!("{:<20}{:>20}", header, "Folio Manual")),
            OutputLine::output(""),
            OutputLine::output("NAME"),
            OutputLine::output(format!("       {} - {}", cmd.name(), cmd.description())),
            OutputLine::output(""),
            OutputLine::output("SYNOPSIS"),
            OutputLine::output(format!("       {}", cmd.usage())),
        ]
    }
}
