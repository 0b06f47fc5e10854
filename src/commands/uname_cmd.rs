use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct UnameCommand;

const KERNEL: &str = "FolioOS";
const RELEASE: &str = "1.0.0";
const VERSION: &str = "#1 SMP PREEMPT";
const MACHINE: &str = "wasm32";

impl Command for UnameCommand {
    fn name(&self) -> &'static str {
        "uname"
    }

    fn description(&self) -> &'static str {
        "Print system information"
    }

    fn usage(&self) -> &'static str {
        "uname [-a] [-s] [-n] [-r] [-v] [-m]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let mut fields: Vec<char> = Vec::new();
        for arg in &ctx.args {
            let Some(flags) = arg.strip_prefix('-') else {
                return vec![OutputLine::error(format!("uname: extra operand '{}'", arg))];
            };
            for c in flags.chars() {
                match c {
                    'a' => fields.extend(['s', 'n', 'r', 'v', 'm']),
                    's' | 'n' | 'r' | 'v' | 'm' => fields.push(c),
                    other => return vec![OutputLine::error(format!("uname: invalid option -- '{}'", other))],
                }
            }
        }

        // 如果没有指定任何标志，只显示内核名
        if fields.is_empty() {
            fields.push('s');
        }

        let parts: Vec<&str> = ['s', 'n', 'r', 'v', 'm']
            .into_iter()
            .filter(|f| fields.contains(f))
            .map(|f| match f {
                's' => KERNEL,
                'n' => ctx.config.hostname.as_str(),
                'r' => RELEASE,
                'v' => VERSION,
                _ => MACHINE,
            })
            .collect();
        vec![OutputLine::output(parts.join(" "))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{texts, Fixture};

    #[test]
    fn test_uname_default() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(&UnameCommand, &[])), vec!["FolioOS"]);
    }

    #[test]
    fn test_uname_all() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(&UnameCommand, &["-a"])), vec!["FolioOS portfolio 1.0.0 #1 SMP PREEMPT wasm32"]);
        assert_eq!(texts(&fx.run(&UnameCommand, &["-mn"])), vec!["portfolio wasm32"]);
    }

    #[test]
    fn test_uname_invalid() {
        let mut fx = Fixture::new();
        assert!(fx.run(&UnameCommand, &["-x"])[0].is_error());
    }
}
