// src/commands/cat/mod.rs
use crate::commands::types::operand_error;
use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn description(&self) -> &'static str {
        "Print file contents"
    }

    fn usage(&self) -> &'static str {
        "cat [-n] file..."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("  -n, --number     number all output lines"),
            ];
        }

        let mut show_line_numbers = false;
        let mut files: Vec<String> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "-n" | "--number" => show_line_numbers = true,
                _ if !arg.starts_with('-') => files.push(arg.clone()),
                _ => return vec![OutputLine::error(format!("cat: invalid option -- '{}'", &arg[1..]))],
            }
        }

        if files.is_empty() {
            return vec![OutputLine::error(format!("usage: {}", self.usage()))];
        }

        let mut out = Vec::new();
        let mut line_number = 1;

        for file in &files {
            let content = match ctx.read_text(file) {
                Ok(c) => c,
                Err(err) => {
                    out.push(operand_error("cat", file, &err));
                    continue;
                }
            };

            for line in content.lines() {
                if show_line_numbers {
                    out.push(OutputLine::output(format!("{:>6}\t{}", line_number, line)));
                    line_number += 1;
                } else {
                    out.push(OutputLine::output(line));
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{texts, Fixture};
    use crate::fs::VfsPath;

    #[test]
    fn test_cat_single_file() {
        let mut fx = Fixture::new();
        let out = fx.run(&CatCommand, &["contact.txt"]);
        assert_eq!(texts(&out), vec!["email: hello@example.dev", "github: github.com/example"]);
    }

    #[test]
    fn test_cat_relative_to_cwd() {
        let mut fx = Fixture::new();
        fx.cwd = VfsPath::parse("/src");
        let out = fx.run(&CatCommand, &["utils/format.ts"]);
        assert_eq!(out.len(), 1);
        assert!(out[0].text.starts_with("export const pad"));
    }

    #[test]
    fn test_cat_with_line_numbers() {
        let mut fx = Fixture::new();
        let out = fx.run(&CatCommand, &["-n", "contact.txt"]);
        assert_eq!(out[0].text, "     1\temail: hello@example.dev");
        assert_eq!(out[1].text, "     2\tgithub: github.com/example");
    }

    #[test]
    fn test_cat_folder_and_missing() {
        let mut fx = Fixture::new();
        let out = fx.run(&CatCommand, &["src", "nope.txt"]);
        assert_eq!(texts(&out), vec!["cat: src: Is a directory", "cat: nope.txt: No such file or directory"]);
        assert!(out.iter().all(|l| l.is_error()));
    }

    #[test]
    fn test_cat_missing_operand() {
        let mut fx = Fixture::new();
        let out = fx.run(&CatCommand, &[]);
        assert_eq!(out[0].text, "usage: cat [-n] file...");
        assert!(out[0].is_error());
    }

    #[test]
    fn test_cat_sees_journal_edits() {
        let mut fx = Fixture::new();
        fx.fs.update_file("contact.txt", "edited\n").unwrap();
        assert_eq!(texts(&fx.run(&CatCommand, &["contact.txt"])), vec!["edited"]);
    }
}
