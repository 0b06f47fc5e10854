use crate::commands::{Command, CommandContext, HostEffect};
use crate::output::OutputLine;

/// The session wipes its buffer before dispatch ever reaches here; this
/// handler only asks the host to clear its screen.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clear the terminal screen"
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        ctx.effects.push(HostEffect::ClearScreen);
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::Fixture;

    #[test]
    fn test_clear_requests_screen_clear() {
        let mut fx = Fixture::new();
        assert!(fx.run(&ClearCommand, &[]).is_empty());
        assert_eq!(fx.effects, vec![HostEffect::ClearScreen]);
    }
}
