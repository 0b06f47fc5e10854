// src/commands/utils/head_tail.rs
use crate::commands::types::operand_error;
use crate::commands::CommandContext;
use crate::output::{text_lines, OutputLine};

#[derive(Debug, Clone)]
pub struct HeadTailOptions {
    pub lines: usize,
    pub bytes: Option<usize>,
    pub quiet: bool,
    pub verbose: bool,
    pub files: Vec<String>,
    pub from_line: bool, // tail +N 语法
}

impl Default for HeadTailOptions {
    fn default() -> Self {
        Self {
            lines: 10,
            bytes: None,
            quiet: false,
            verbose: false,
            files: Vec::new(),
            from_line: false,
        }
    }
}

fn parse_count(cmd_name: &str, value: &str) -> Result<usize, OutputLine> {
    value
        .parse()
        .map_err(|_| OutputLine::error(format!("{}: invalid number of lines: '{}'", cmd_name, value)))
}

pub fn parse_head_tail_args(args: &[String], cmd_name: &str) -> Result<HeadTailOptions, OutputLine> {
    let mut opts = HeadTailOptions::default();
    let is_tail = cmd_name == "tail";

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "-n" && i + 1 < args.len() {
            i += 1;
            let next_arg = &args[i];
            if let Some(n) = next_arg.strip_prefix('+').filter(|_| is_tail) {
                opts.from_line = true;
                opts.lines = parse_count(cmd_name, n)?;
            } else {
                opts.lines = parse_count(cmd_name, next_arg)?;
            }
        } else if let Some(n) = arg.strip_prefix("-n+").filter(|_| is_tail) {
            opts.from_line = true;
            opts.lines = parse_count(cmd_name, n)?;
        } else if let Some(n) = arg.strip_prefix("-n").filter(|n| !n.is_empty()) {
            opts.lines = parse_count(cmd_name, n)?;
        } else if let Some(n) = arg.strip_prefix("--lines=") {
            opts.lines = parse_count(cmd_name, n)?;
        } else if arg == "-c" && i + 1 < args.len() {
            i += 1;
            opts.bytes = Some(parse_count(cmd_name, &args[i])?);
        } else if let Some(n) = arg.strip_prefix("-c").filter(|n| !n.is_empty()) {
            opts.bytes = Some(parse_count(cmd_name, n)?);
        } else if arg == "-q" || arg == "--quiet" {
            opts.quiet = true;
        } else if arg == "-v" || arg == "--verbose" {
            opts.verbose = true;
        } else if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c.is_ascii_digit()) {
            opts.lines = parse_count(cmd_name, &arg[1..])?;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(OutputLine::error(format!("{}: invalid option -- '{}'", cmd_name, &arg[1..])));
        } else {
            opts.files.push(arg.clone());
        }
        i += 1;
    }

    if opts.bytes == Some(0) {
        return Err(OutputLine::error(format!("{}: invalid number of bytes", cmd_name)));
    }
    if opts.files.is_empty() {
        return Err(OutputLine::error(format!("usage: {} [-n N] file...", cmd_name)));
    }

    Ok(opts)
}

/// Apply `processor` to every file operand, with `==> name <==` headers
/// when more than one file is shown.
pub fn process_head_tail_files<F>(
    ctx: &CommandContext<'_>,
    opts: &HeadTailOptions,
    cmd_name: &str,
    processor: F,
) -> Vec<OutputLine>
where
    F: Fn(&str) -> Vec<String>,
{
    let mut out = Vec::new();
    let show_headers = opts.verbose || (!opts.quiet && opts.files.len() > 1);
    let mut files_processed = 0;

    for file in &opts.files {
        match ctx.read_text(file) {
            Ok(content) => {
                if show_headers {
                    if files_processed > 0 {
                        out.push(OutputLine::output(""));
                    }
                    out.push(OutputLine::output(format!("==> {} <==", file)));
                }
                out.extend(processor(&content).into_iter().map(OutputLine::output));
                files_processed += 1;
            }
            Err(err) => out.push(operand_error(cmd_name, file, &err)),
        }
    }

    out
}

pub fn get_head(content: &str, lines: usize, bytes: Option<usize>) -> Vec<String> {
    if let Some(b) = bytes {
        let head: String = content.chars().take(b).collect();
        return text_lines(&head).into_iter().map(|l| l.text).collect();
    }
    content.lines().take(lines).map(str::to_string).collect()
}

pub fn get_tail(content: &str, lines: usize, bytes: Option<usize>, from_line: bool) -> Vec<String> {
    if let Some(b) = bytes {
        let chars: Vec<char> = content.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(b)..].iter().collect();
        return text_lines(&tail).into_iter().map(|l| l.text).collect();
    }

    let all: Vec<&str> = content.lines().collect();
    // +N 语法：从第 N 行开始
    let start = if from_line { lines.saturating_sub(1) } else { all.len().saturating_sub(lines) };
    all.iter().skip(start).map(|s| s.to_string()).collect()
}
