use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct UptimeCommand;

fn format_duration(total_minutes: i64) -> String {
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;
    match (days, hours) {
        (0, 0) => format!("{} min", minutes),
        (0, _) => format!("{}:{:02}", hours, minutes),
        (1, _) => format!("1 day, {}:{:02}", hours, minutes),
        _ => format!("{} days, {}:{:02}", days, hours, minutes),
    }
}

impl Command for UptimeCommand {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn description(&self) -> &'static str {
        "Show how long the session has been running"
    }

    fn usage(&self) -> &'static str {
        "uptime [-p]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let minutes = (ctx.now - ctx.started_at).num_minutes().max(0);

        if ctx.args.iter().any(|a| a == "-p" || a == "--pretty") {
            let hours = minutes / 60;
            let mins = minutes % 60;
            let mut parts = Vec::new();
            if hours > 0 {
                parts.push(format!("{} hour{}", hours, if hours == 1 { "" } else { "s" }));
            }
            parts.push(format!("{} minute{}", mins, if mins == 1 { "" } else { "s" }));
            return vec![OutputLine::output(format!("up {}", parts.join(", ")))];
        }

        vec![OutputLine::output(format!(
            " {} up {},  1 user,  load average: 0.08, 0.03, 0.01",
            ctx.now.format("%H:%M:%S"),
            format_duration(minutes)
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{texts, Fixture};

    #[test]
    fn test_uptime_since_session_start() {
        let mut fx = Fixture::new();
        assert_eq!(
            texts(&fx.run(&UptimeCommand, &[])),
            vec![" 10:35:00 up 1:35,  1 user,  load average: 0.08, 0.03, 0.01"]
        );
        assert_eq!(texts(&fx.run(&UptimeCommand, &["-p"])), vec!["up 1 hour, 35 minutes"]);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(5), "5 min");
        assert_eq!(format_duration(24 * 60 + 61), "1 day, 1:01");
        assert_eq!(format_duration(3 * 24 * 60), "3 days, 0:00");
    }
}
