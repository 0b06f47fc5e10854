// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext};
use crate::fs::{EntryRef, VfsPath, VirtualFs};
use crate::output::OutputLine;

pub struct MkdirCommand;

fn create_parents(fs: &mut VirtualFs, path: &VfsPath) -> Result<(), &'static str> {
    for ancestor in path.ancestors() {
        match fs.lookup(&ancestor) {
            Some(EntryRef::Folder(_)) => {}
            Some(EntryRef::File(_)) => return Err("Not a directory"),
            None => fs.create_folder(&ancestor.to_key()).map_err(|e| e.reason())?,
        }
    }
    Ok(())
}

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn description(&self) -> &'static str {
        "Create directories"
    }

    fn usage(&self) -> &'static str {
        "mkdir [-p] [-v] dir..."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("  -p, --parents    no error if existing, make parent directories as needed"),
                OutputLine::output("  -v, --verbose    print a message for each created directory"),
            ];
        }

        let mut parents = false;
        let mut verbose = false;
        let mut dirs: Vec<String> = Vec::new();
        for arg in &ctx.args {
            match arg.as_str() {
                "-p" | "--parents" => parents = true,
                "-v" | "--verbose" => verbose = true,
                "-pv" | "-vp" => {
                    parents = true;
                    verbose = true;
                }
                _ if !arg.starts_with('-') => dirs.push(arg.clone()),
                other => return vec![OutputLine::error(format!("mkdir: invalid option '{}'", other))],
            }
        }

        if dirs.is_empty() {
            return vec![OutputLine::error("mkdir: missing operand")];
        }

        let mut out = Vec::new();
        for dir in &dirs {
            let path = ctx.resolve(dir);
            let existing = ctx.fs.lookup(&path).map(|e| e.is_folder());
            let result = match existing {
                Some(true) if parents => continue,
                Some(_) => Err("File exists"),
                None if parents => create_parents(ctx.fs, &path),
                None => match path.parent().map(|p| ctx.fs.lookup(&p).map(|e| e.is_folder())) {
                    Some(Some(true)) | None => Ok(()),
                    Some(Some(false)) => Err("Not a directory"),
                    Some(None) => Err("No such file or directory"),
                },
            };
            let result = result.and_then(|()| ctx.fs.create_folder(&path.to_key()).map_err(|e| e.reason()));
            match result {
                Ok(()) if verbose => out.push(OutputLine::output(format!("mkdir: created directory '{}'", dir))),
                Ok(()) => {}
                Err(reason) => {
                    out.push(OutputLine::error(format!("mkdir: cannot create directory '{}': {}", dir, reason)))
                }
            }
        }
        out
    }
}
