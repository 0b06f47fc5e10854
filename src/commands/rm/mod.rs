// src/commands/rm/mod.rs
use crate::commands::{Command, CommandContext};
use crate::fs::EntryRef;
use crate::output::OutputLine;

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn description(&self) -> &'static str {
        "Remove files or directories"
    }

    fn usage(&self) -> &'static str {
        "rm [-r] [-f] [-v] path..."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("  -f, --force          ignore nonexistent files and arguments"),
                OutputLine::output("  -r, -R, --recursive  remove directories and their contents recursively"),
                OutputLine::output("  -v, --verbose        explain what is being done"),
            ];
        }

        let mut recursive = false;
        let mut force = false;
        let mut verbose = false;
        let mut paths: Vec<String> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "--recursive" => recursive = true,
                "--force" => force = true,
                "--verbose" => verbose = true,
                _ if arg.starts_with('-') && arg.len() > 1 => {
                    for c in arg[1..].chars() {
                        match c {
                            'r' | 'R' => recursive = true,
                            'f' => force = true,
                            'v' => verbose = true,
                            other => return vec![OutputLine::error(format!("rm: invalid option -- '{}'", other))],
                        }
                    }
                }
                _ => paths.push(arg.clone()),
            }
        }

        if paths.is_empty() {
            if force {
                return Vec::new();
            }
            return vec![OutputLine::error("rm: missing operand")];
        }

        let mut out = Vec::new();
        for target in &paths {
            let path = ctx.resolve(target);
            if path.is_root() {
                out.push(OutputLine::error("rm: it is dangerous to operate recursively on '/'"));
                continue;
            }

            // 检查是否为目录
            let is_folder = match ctx.fs.lookup(&path) {
                Some(EntryRef::Folder(_)) => true,
                Some(EntryRef::File(_)) => false,
                None => {
                    if !force {
                        out.push(OutputLine::error(format!(
                            "rm: cannot remove '{}': No such file or directory",
                            target
                        )));
                    }
                    continue;
                }
            };

            if is_folder && !recursive {
                out.push(OutputLine::error(format!("rm: cannot remove '{}': Is a directory", target)));
                continue;
            }

            let key = path.to_key();
            let result = if is_folder { ctx.fs.delete_folder(&key) } else { ctx.fs.delete_file(&key) };
            match result {
                Ok(()) if verbose => out.push(OutputLine::output(format!("removed '{}'", target))),
                Ok(()) => {}
                Err(err) => {
                    out.push(OutputLine::error(format!("rm: cannot remove '{}': {}", target, err.reason())))
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::Fixture;
    use crate::fs::VfsPath;

    #[test]
    fn test_rm_file() {
        let mut fx = Fixture::new();
        assert!(fx.run(&RmCommand, &["contact.txt"]).is_empty());
        assert!(fx.fs.read_file("contact.txt").is_none());
    }

    #[test]
    fn test_rm_folder_needs_recursive() {
        let mut fx = Fixture::new();
        let out = fx.run(&RmCommand, &["src"]);
        assert_eq!(out[0].text, "rm: cannot remove 'src': Is a directory");
        assert!(fx.run(&RmCommand, &["-rf", "src"]).is_empty());
        assert!(!fx.fs.exists(&VfsPath::parse("src")));
        assert!(fx.fs.read_file("src/utils/format.ts").is_none());
    }

    #[test]
    fn test_rm_missing() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&RmCommand, &["ghost"])[0].text, "rm: cannot remove 'ghost': No such file or directory");
        assert!(fx.run(&RmCommand, &["-f", "ghost"]).is_empty());
        assert!(fx.run(&RmCommand, &[])[0].is_error());
    }

    #[test]
    fn test_rm_closes_open_handle() {
        let mut fx = Fixture::new();
        fx.fs.open_file("about.md");
        fx.run(&RmCommand, &["-v", "about.md"]);
        assert_eq!(fx.fs.open_files().count(), 0);
    }

    #[test]
    fn test_rm_refuses_root() {
        let mut fx = Fixture::new();
        assert!(fx.run(&RmCommand, &["-r", "/"])[0].is_error());
        assert!(fx.fs.exists(&VfsPath::parse("README.md")));
    }
}
