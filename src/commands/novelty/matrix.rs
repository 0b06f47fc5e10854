use rand::Rng;

use super::session_rng;
use crate::commands::{Command, CommandContext};
use crate::output::{OutputKind, OutputLine};

pub struct MatrixCommand;

const GLYPHS: &[char] = &[
    'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'Z', ':', '.',
];
const WIDTH: usize = 48;
const DEFAULT_ROWS: usize = 12;
const MAX_ROWS: usize = 40;

impl Command for MatrixCommand {
    fn name(&self) -> &'static str {
        "matrix"
    }

    fn description(&self) -> &'static str {
        "Follow the white rabbit"
    }

    fn usage(&self) -> &'static str {
        "matrix [rows]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let rows = match ctx.args.first() {
            None => DEFAULT_ROWS,
            Some(arg) => match arg.parse::<usize>() {
                Ok(n) if n > 0 => n.min(MAX_ROWS),
                _ => return vec![OutputLine::error(format!("matrix: invalid row count '{}'", arg))],
            },
        };

        let mut rng = session_rng(ctx);
        (0..rows)
            .map(|_| {
                let line: String = (0..WIDTH)
                    .map(|_| if rng.gen_bool(0.35) { ' ' } else { GLYPHS[rng.gen_range(0..GLYPHS.len())] })
                    .collect();
                OutputLine::new(OutputKind::Success, line.trim_end())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::Fixture;

    #[test]
    fn test_matrix_rows() {
        let mut fx = Fixture::new();
        let out = fx.run(&MatrixCommand, &["5"]);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|l| l.kind == OutputKind::Success));
        assert!(out.iter().all(|l| l.text.chars().count() <= WIDTH));
        assert_eq!(fx.run(&MatrixCommand, &["500"]).len(), MAX_ROWS);
    }

    #[test]
    fn test_matrix_invalid() {
        let mut fx = Fixture::new();
        assert!(fx.run(&MatrixCommand, &["x"])[0].is_error());
    }
}
