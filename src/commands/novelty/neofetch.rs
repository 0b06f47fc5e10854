use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct NeofetchCommand;

const LOGO: &[&str] = &[
    "   _______   ",
    "  |  ___  |  ",
    "  | |   | |  ",
    "  | |___| |  ",
    "  |  _____|  ",
    "  | |        ",
    "  |_|  folio ",
];

impl Command for NeofetchCommand {
    fn name(&self) -> &'static str {
        "neofetch"
    }

    fn description(&self) -> &'static str {
        "Show system information with a logo"
    }

    fn usage(&self) -> &'static str {
        "neofetch"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let user = ctx.user().to_string();
        let title = format!("{}@{}", user, ctx.config.hostname);
        let minutes = (ctx.now - ctx.started_at).num_minutes().max(0);
        let env = |key: &str| ctx.env.get(key).cloned().unwrap_or_default();

        let info = [
            title.clone(),
            "-".repeat(title.chars().count()),
            "OS: FolioOS 1.0.0 wasm32".to_string(),
            format!("Uptime: {} mins", minutes),
            format!("Shell: {}", env("SHELL").rsplit('/').next().unwrap_or_default()),
            format!("Terminal: {}", env("TERM")),
            format!("Files: {}", ctx.fs.files().len()),
            format!("Commands: {}", ctx.registry.names().len()),
            format!("Node: {}", env("NODE_VERSION")),
        ];

        let rows = LOGO.len().max(info.len());
        (0..rows)
            .map(|i| {
                let logo = LOGO.get(i).copied().unwrap_or("             ");
                let text = info.get(i).map(String::as_str).unwrap_or_default();
                OutputLine::output(format!("{}  {}", logo, text).trim_end().to_string())
            })
            .collect()
    }
}
