use crate::arithmetic::{self, ArithmeticError};
use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct NodeCommand;

/// `console.log(x)` prints `x`; the argument is still validated on its own.
fn unwrap_console_log(source: &str) -> &str {
    let trimmed = source.trim().trim_end_matches(';');
    trimmed
        .strip_prefix("console.log(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed)
}

fn eval_line(source: &str) -> OutputLine {
    match arithmetic::evaluate(unwrap_console_log(source)) {
        Ok(value) => OutputLine::output(arithmetic::format_number(value)),
        Err(ArithmeticError::DisallowedCharacters) => {
            OutputLine::error("node: syntax error: disallowed characters (only numeric expressions are supported)")
        }
        Err(err) => OutputLine::error(format!("node: syntax error: {}", err)),
    }
}

impl Command for NodeCommand {
    fn name(&self) -> &'static str {
        "node"
    }

    fn description(&self) -> &'static str {
        "JavaScript runtime (numeric expressions only)"
    }

    fn usage(&self) -> &'static str {
        "node [-v] [-e expression]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let version = ctx.env.get("NODE_VERSION").cloned().unwrap_or_else(|| "v20.11.0".to_string());
        match ctx.args.first().map(String::as_str) {
            None => vec![
                OutputLine::output(format!("Welcome to Node.js {}.", version)),
                OutputLine::output("The interactive REPL is not available here; try `node -e \"6 * 7\"`."),
            ],
            Some("-v") | Some("--version") => vec![OutputLine::output(version)],
            Some("-e") | Some("-p") | Some("--eval") | Some("--print") => {
                let source = ctx.args[1..].join(" ");
                if source.trim().is_empty() {
                    return vec![OutputLine::error(format!("node: {} requires an argument", ctx.args[0]))];
                }
                vec![eval_line(&source)]
            }
            Some(script) => match ctx.read_text(script) {
                Ok(_) => vec![OutputLine::error(format!(
                    "node: {}: running script files is not supported in this terminal",
                    script
                ))],
                Err(_) => vec![OutputLine::error(format!("node: Cannot find module '{}'", ctx.resolve(script)))],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{texts, Fixture};

    #[test]
    fn test_node_version() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(&NodeCommand, &["-v"])), vec!["v20.11.0"]);
    }

    #[test]
    fn test_node_eval_numeric() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(&NodeCommand, &["-e", "2 ** 10"])), vec!["1024"]);
        assert_eq!(texts(&fx.run(&NodeCommand, &["-e", "console.log(7 / 2);"])), vec!["3.5"]);
    }

    #[test]
    fn test_node_rejects_code() {
        let mut fx = Fixture::new();
        let out = fx.run(&NodeCommand, &["-e", "process.exit(1)"]);
        assert!(out[0].is_error());
        assert!(out[0].text.contains("disallowed characters"));
        let out = fx.run(&NodeCommand, &["-e", "console.log(require('fs'))"]);
        assert!(out[0].text.contains("disallowed characters"));
    }

    #[test]
    fn test_node_eval_errors() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&NodeCommand, &["-e", "1/0"])[0].text, "node: syntax error: division by zero");
        assert!(fx.run(&NodeCommand, &["-e"])[0].is_error());
    }

    #[test]
    fn test_node_script_file() {
        let mut fx = Fixture::new();
        assert!(fx.run(&NodeCommand, &["src/main.ts"])[0].text.contains("not supported"));
        assert_eq!(fx.run(&NodeCommand, &["app.js"])[0].text, "node: Cannot find module '/app.js'");
    }
}
