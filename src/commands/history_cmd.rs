use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn description(&self) -> &'static str {
        "Show command history"
    }

    fn usage(&self) -> &'static str {
        "history [-c] [N]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![
                OutputLine::output("history - display command history"),
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("  -c      clear the history list"),
            ];
        }

        if ctx.args.first().map(String::as_str) == Some("-c") {
            ctx.history.clear();
            return Vec::new();
        }

        let entries = ctx.history.entries();
        let count = match ctx.args.first() {
            Some(arg) => match arg.parse::<usize>() {
                Ok(n) => n.min(entries.len()),
                Err(_) => return vec![OutputLine::error(format!("history: {}: numeric argument required", arg))],
            },
            None => entries.len(),
        };

        let start = entries.len() - count;
        entries
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, cmd)| OutputLine::output(format!("{:>5}  {}", i + 1, cmd)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{texts, Fixture};

    fn make_fixture() -> Fixture {
        let mut fx = Fixture::new();
        for line in ["ls", "cd src", "cat main.ts"] {
            fx.history.push(line);
        }
        fx
    }

    #[test]
    fn test_history_numbered() {
        let mut fx = make_fixture();
        assert_eq!(texts(&fx.run(&HistoryCommand, &[])), vec!["    1  ls", "    2  cd src", "    3  cat main.ts"]);
    }

    #[test]
    fn test_history_last_n() {
        let mut fx = make_fixture();
        assert_eq!(texts(&fx.run(&HistoryCommand, &["1"])), vec!["    3  cat main.ts"]);
        assert_eq!(fx.run(&HistoryCommand, &["10"]).len(), 3);
        assert!(fx.run(&HistoryCommand, &["x"])[0].is_error());
    }

    #[test]
    fn test_history_clear() {
        let mut fx = make_fixture();
        fx.run(&HistoryCommand, &["-c"]);
        assert!(fx.history.is_empty());
    }
}
