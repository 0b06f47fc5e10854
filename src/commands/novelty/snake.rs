use crate::commands::{Command, CommandContext, HostEffect};
use crate::output::OutputLine;

pub struct SnakeCommand;

impl Command for SnakeCommand {
    fn name(&self) -> &'static str {
        "snake"
    }

    fn description(&self) -> &'static str {
        "Play snake"
    }

    fn usage(&self) -> &'static str {
        "snake"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        ctx.effects.push(HostEffect::LaunchGame(self.name().to_string()));
        vec![
            OutputLine::success("Launching snake..."),
            OutputLine::output("Use the arrow keys to move. Press Esc to quit."),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::Fixture;

    #[test]
    fn test_snake_launches_game() {
        let mut fx = Fixture::new();
        let out = fx.run(&SnakeCommand, &[]);
        assert_eq!(out[0].text, "Launching snake...");
        assert_eq!(fx.effects, vec![HostEffect::LaunchGame("snake".to_string())]);
    }
}
