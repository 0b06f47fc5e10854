use crate::arithmetic::{self, ArithmeticError};
use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct CalcCommand;

impl Command for CalcCommand {
    fn name(&self) -> &'static str {
        "calc"
    }

    fn description(&self) -> &'static str {
        "Evaluate an arithmetic expression"
    }

    fn usage(&self) -> &'static str {
        "calc expression"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let expression = ctx.args.join(" ");
        match arithmetic::evaluate(&expression) {
            Ok(value) => vec![OutputLine::output(arithmetic::format_number(value))],
            Err(ArithmeticError::Empty) => vec![OutputLine::error(format!("usage: {}", self.usage()))],
            Err(err) => vec![OutputLine::error(format!("calc: syntax error: {}", err))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{texts, Fixture};

    #[test]
    fn test_calc_evaluates() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(&CalcCommand, &["(2", "+", "3)", "*", "4"])), vec!["20"]);
        assert_eq!(texts(&fx.run(&CalcCommand, &["2^3^2"])), vec!["512"]);
        assert_eq!(texts(&fx.run(&CalcCommand, &["10 / 4"])), vec!["2.5"]);
    }

    #[test]
    fn test_calc_rejects_disallowed_characters() {
        let mut fx = Fixture::new();
        let out = fx.run(&CalcCommand, &["alert(1)"]);
        assert_eq!(out[0].text, "calc: syntax error: disallowed characters");
        assert!(out[0].is_error());
    }

    #[test]
    fn test_calc_errors() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&CalcCommand, &["5 % 0"])[0].text, "calc: syntax error: division by zero");
        assert!(fx.run(&CalcCommand, &["(1"])[0].is_error());
        assert!(fx.run(&CalcCommand, &[])[0].is_error());
    }
}
