use crate::commands::types::operand_error;
use crate::commands::{Command, CommandContext};
use crate::fs::{EntryRef, FsError};
use crate::output::OutputLine;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change the working directory"
    }

    fn usage(&self) -> &'static str {
        "cd [path | - | ~]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.args.len() > 1 {
            return vec![OutputLine::error("cd: too many arguments")];
        }

        let target = match ctx.args.first().map(|s| s.as_str()) {
            None | Some("~") => ctx.config.home.clone(),
            Some("-") => match ctx.env.get("OLDPWD") {
                Some(old) => old.clone(),
                None => return vec![OutputLine::error("cd: OLDPWD not set")],
            },
            Some(other) => other.to_string(),
        };

        let path = ctx.resolve(&target);
        match ctx.fs.lookup(&path) {
            Some(EntryRef::Folder(_)) => {}
            Some(EntryRef::File(_)) => {
                return vec![operand_error("cd", &target, &FsError::not_directory(&path, "chdir"))];
            }
            None => return vec![operand_error("cd", &target, &FsError::not_found(&path, "chdir"))],
        }

        let previous = std::mem::replace(ctx.cwd, path);
        ctx.env.insert("OLDPWD".to_string(), previous.to_string());
        ctx.env.insert("PWD".to_string(), ctx.cwd.to_string());

        // `cd -` reports where it went
        if ctx.args.first().map(|s| s.as_str()) == Some("-") {
            return vec![OutputLine::output(ctx.cwd.to_string())];
        }
        Vec::new()
    }
}
