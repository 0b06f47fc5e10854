// src/commands/echo/mod.rs
use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Print arguments"
    }

    fn usage(&self) -> &'static str {
        "echo [-n] [-e] words..."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let args = &ctx.args;
        let mut interpret_escapes = false;
        let mut start_index = 0;

        // Parse flags. Output is line-based, so -n only suppresses the
        // blank line a bare `echo` would otherwise print.
        let mut no_newline = false;
        while start_index < args.len() {
            match args[start_index].as_str() {
                "-n" => no_newline = true,
                "-e" => interpret_escapes = true,
                "-E" => interpret_escapes = false,
                "-ne" | "-en" => {
                    no_newline = true;
                    interpret_escapes = true;
                }
                _ => break,
            }
            start_index += 1;
        }

        let mut output = args[start_index..].join(" ");
        if interpret_escapes {
            output = process_escapes(&output);
        }

        if output.is_empty() {
            return if no_newline { Vec::new() } else { vec![OutputLine::output("")] };
        }
        output.split('\n').map(OutputLine::output).collect()
    }
}

/// Process `echo -e` escape sequences. `\c` truncates the rest.
fn process_escapes(input: &str) -> String {
    let mut result = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            None => result.push('\\'),
            Some('\\') => result.push('\\'),
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('e') | Some('E') => result.push('\x1b'),
            Some('c') => break,
            Some('x') => {
                let mut hex = String::new();
                while hex.len() < 2 && chars.peek().is_some_and(|h| h.is_ascii_hexdigit()) {
                    hex.extend(chars.next());
                }
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => result.push(decoded),
                    None => result.push_str("\\x"),
                }
            }
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
        }
    }

    result
}
