use crate::commands::{Command, CommandContext};
use crate::fs::EntryRef;
use crate::output::OutputLine;

pub struct OpenCommand;

impl Command for OpenCommand {
    fn name(&self) -> &'static str {
        "open"
    }

    fn description(&self) -> &'static str {
        "Open a file in the editor"
    }

    fn usage(&self) -> &'static str {
        "open file..."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.args.is_empty() {
            return vec![OutputLine::error(format!("usage: {}", self.usage()))];
        }

        let targets = ctx.args.clone();
        let mut out = Vec::new();
        for target in &targets {
            if let Some(EntryRef::Folder(_)) = ctx.fs.lookup(&ctx.resolve(target)) {
                out.push(OutputLine::error(format!("open: {}: Is a directory", target)));
                continue;
            }
            match ctx.open_file(target) {
                Some(key) => out.push(OutputLine::success(format!("Opening {}...", key))),
                None => out.push(OutputLine::error(format!("open: {}: No such file or directory", target))),
            }
        }
        out
    }
}
