// src/commands/head/mod.rs
use crate::commands::utils::{get_head, parse_head_tail_args, process_head_tail_files};
use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn description(&self) -> &'static str {
        "Show the first lines of a file"
    }

    fn usage(&self) -> &'static str {
        "head [-n N] [-c N] [-q] [-v] file..."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("Print the first 10 lines of each file."),
            ];
        }

        let opts = match parse_head_tail_args(&ctx.args, "head") {
            Ok(o) => o,
            Err(e) => return vec![e],
        };

        let lines = opts.lines;
        let bytes = opts.bytes;

        process_head_tail_files(ctx, &opts, "head", |content| get_head(content, lines, bytes))
    }
}
