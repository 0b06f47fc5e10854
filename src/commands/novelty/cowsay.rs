use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct CowsayCommand;

const MAX_WIDTH: usize = 40;

/// Greedy word wrap; a single overlong word gets a line of its own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn bubble(lines: &[String]) -> Vec<String> {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = vec![format!(" {}", "_".repeat(width + 2))];
    for (i, line) in lines.iter().enumerate() {
        let (open, close) = match (lines.len(), i) {
            (1, _) => ('<', '>'),
            (_, 0) => ('/', '\\'),
            (n, i) if i + 1 == n => ('\\', '/'),
            _ => ('|', '|'),
        };
        let pad = width - line.chars().count();
        out.push(format!("{} {}{} {}", open, line, " ".repeat(pad), close));
    }
    out.push(format!(" {}", "-".repeat(width + 2)));
    out
}

impl Command for CowsayCommand {
    fn name(&self) -> &'static str {
        "cowsay"
    }

    fn description(&self) -> &'static str {
        "A talking cow"
    }

    fn usage(&self) -> &'static str {
        "cowsay [message]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let message = if ctx.args.is_empty() { "Moo!".to_string() } else { ctx.args.join(" ") };
        let mut out: Vec<OutputLine> = bubble(&wrap(&message, MAX_WIDTH)).into_iter().map(OutputLine::output).collect();
        for line in [r"        \   ^__^", r"         \  (oo)\_______", r"            (__)\       )\/\", r"                ||----w |", r"                ||     ||"] {
            out.push(OutputLine::output(line));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::Fixture;

    #[test]
    fn test_single_line_bubble() {
        let mut fx = Fixture::new();
        let out = fx.run(&CowsayCommand, &["hello"]);
        assert_eq!(out[0].text, " _______");
        assert_eq!(out[1].text, "< hello >");
        assert_eq!(out[2].text, " -------");
        assert!(out[4].text.contains("(oo)"));
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert_eq!(wrap("", 4), vec![""]);
    }

    #[test]
    fn test_multi_line_bubble() {
        let lines = bubble(&["one".to_string(), "two".to_string(), "six".to_string()]);
        assert_eq!(lines[1], "/ one \\");
        assert_eq!(lines[2], "| two |");
        assert_eq!(lines[3], "\\ six /");
    }
}
