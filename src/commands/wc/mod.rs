// src/commands/wc/mod.rs
use crate::commands::types::operand_error;
use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct WcCommand;

#[derive(Default, Clone, Copy)]
struct Stats {
    lines: usize,
    words: usize,
    chars: usize,
}

fn count_stats(content: &str) -> Stats {
    Stats {
        lines: content.matches('\n').count(),
        words: content.split_whitespace().count(),
        chars: content.chars().count(),
    }
}

impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn description(&self) -> &'static str {
        "Count lines, words and characters"
    }

    fn usage(&self) -> &'static str {
        "wc [-l] [-w] [-c] file..."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("  -l    print the newline counts"),
                OutputLine::output("  -w    print the word counts"),
                OutputLine::output("  -c    print the character counts"),
            ];
        }

        let mut show_lines = false;
        let mut show_words = false;
        let mut show_chars = false;
        let mut files: Vec<String> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "-l" | "--lines" => show_lines = true,
                "-w" | "--words" => show_words = true,
                "-c" | "--bytes" | "-m" | "--chars" => show_chars = true,
                _ if !arg.starts_with('-') => files.push(arg.clone()),
                _ => return vec![OutputLine::error(format!("wc: invalid option -- '{}'", &arg[1..]))],
            }
        }

        // 如果没有指定任何标志，显示全部
        if !show_lines && !show_words && !show_chars {
            show_lines = true;
            show_words = true;
            show_chars = true;
        }

        if files.is_empty() {
            return vec![OutputLine::error(format!("usage: {}", self.usage()))];
        }

        let mut out = Vec::new();
        let mut total = Stats::default();
        let mut counted = 0;

        let render = |stats: Stats, name: &str| {
            let mut fields = Vec::new();
            if show_lines {
                fields.push(format!("{:>7}", stats.lines));
            }
            if show_words {
                fields.push(format!("{:>7}", stats.words));
            }
            if show_chars {
                fields.push(format!("{:>7}", stats.chars));
            }
            OutputLine::output(format!("{} {}", fields.join(" "), name))
        };

        for file in &files {
            match ctx.read_text(file) {
                Ok(content) => {
                    let stats = count_stats(&content);
                    total.lines += stats.lines;
                    total.words += stats.words;
                    total.chars += stats.chars;
                    counted += 1;
                    out.push(render(stats, file.as_str()));
                }
                Err(err) => out.push(operand_error("wc", file, &err)),
            }
        }

        if counted > 1 {
            out.push(render(total, "total"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{texts, Fixture};

    #[test]
    fn test_count_stats() {
        let stats = count_stats("hello world\nfoo\n");
        assert_eq!((stats.lines, stats.words, stats.chars), (2, 3, 16));
    }

    #[test]
    fn test_wc_all_counts() {
        let mut fx = Fixture::new();
        let out = fx.run(&WcCommand, &["contact.txt"]);
        assert_eq!(texts(&out), vec!["      2       4      52 contact.txt"]);
    }

    #[test]
    fn test_wc_lines_only_with_total() {
        let mut fx = Fixture::new();
        let out = fx.run(&WcCommand, &["-l", "contact.txt", "about.md"]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].text, "      2 contact.txt");
        assert!(out[2].text.ends_with(" total"));
    }

    #[test]
    fn test_wc_errors() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&WcCommand, &["src"])[0].text, "wc: src: Is a directory");
        assert!(fx.run(&WcCommand, &[])[0].is_error());
    }
}
