use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct HostnameCommand;

impl Command for HostnameCommand {
    fn name(&self) -> &'static str {
        "hostname"
    }

    fn description(&self) -> &'static str {
        "Show the host name"
    }

    fn usage(&self) -> &'static str {
        "hostname"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        vec![OutputLine::output(ctx.config.hostname.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::Fixture;

    #[test]
    fn test_hostname() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&HostnameCommand, &[])[0].text, "portfolio");
    }
}
