// src/commands/tail/mod.rs
use crate::commands::utils::{get_tail, parse_head_tail_args, process_head_tail_files};
use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct TailCommand;

impl Command for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn description(&self) -> &'static str {
        "Show the last lines of a file"
    }

    fn usage(&self) -> &'static str {
        "tail [-n N | -n +N] [-c N] [-q] [-v] file..."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("Print the last 10 lines of each file; -n +N starts at line N."),
            ];
        }

        let opts = match parse_head_tail_args(&ctx.args, "tail") {
            Ok(o) => o,
            Err(e) => return vec![e],
        };

        let lines = opts.lines;
        let bytes = opts.bytes;
        let from_line = opts.from_line;

        process_head_tail_files(ctx, &opts, "tail", |content| get_tail(content, lines, bytes, from_line))
    }
}
