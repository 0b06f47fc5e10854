use crate::commands::{Builtin, Command, CommandContext};
use crate::output::OutputLine;

pub struct HelpCommand;

const CATEGORIES: &[(&str, &[Builtin])] = &[
    ("Navigation", &[Builtin::Ls, Builtin::Cd, Builtin::Pwd, Builtin::Tree, Builtin::Find]),
    (
        "Files",
        &[
            Builtin::Cat,
            Builtin::Head,
            Builtin::Tail,
            Builtin::Wc,
            Builtin::Grep,
            Builtin::Open,
            Builtin::Touch,
            Builtin::Mkdir,
            Builtin::Rm,
        ],
    ),
    (
        "Environment",
        &[Builtin::Env, Builtin::Export, Builtin::Unset, Builtin::Echo, Builtin::Alias, Builtin::Unalias],
    ),
    (
        "Session",
        &[
            Builtin::History,
            Builtin::Clear,
            Builtin::Whoami,
            Builtin::Date,
            Builtin::Uptime,
            Builtin::Hostname,
            Builtin::Uname,
            Builtin::Help,
            Builtin::Man,
            Builtin::Which,
        ],
    ),
    ("Packages & VCS", &[Builtin::Npm, Builtin::Node, Builtin::Git, Builtin::Curl, Builtin::Ping]),
];

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "List available commands"
    }

    fn usage(&self) -> &'static str {
        "help [command]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if let Some(name) = ctx.args.first() {
            return match ctx.registry.get(name) {
                Some(cmd) => vec![
                    OutputLine::output(format!("{} - {}", cmd.name(), cmd.description())),
                    OutputLine::output(format!("Usage: {}", cmd.usage())),
                ],
                None => vec![OutputLine::error(format!("help: no help topics match `{}'", name))],
            };
        }

        let mut out = vec![OutputLine::output("Available commands:"), OutputLine::output("")];
        for (category, builtins) in CATEGORIES {
            let names: Vec<&str> = builtins.iter().map(|b| b.name()).collect();
            out.push(OutputLine::output(format!("  {}:", category)));
            out.push(OutputLine::output(format!("    {}", names.join(", "))));
        }

        let extras: Vec<&str> =
            ctx.registry.names().into_iter().filter(|n| Builtin::from_name(n).is_none()).collect();
        if !extras.is_empty() {
            out.push(OutputLine::output("  Fun:"));
            out.push(OutputLine::output(format!("    {}", extras.join(", "))));
        }

        out.push(OutputLine::output(""));
        out.push(OutputLine::output("Use 'man <command>' or '<command> --help' for details."));
        out
    }
}
