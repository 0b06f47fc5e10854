// src/commands/touch/mod.rs
use crate::commands::{Command, CommandContext};
use crate::fs::EntryRef;
use crate::output::OutputLine;

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn description(&self) -> &'static str {
        "Create empty files"
    }

    fn usage(&self) -> &'static str {
        "touch [-c] file..."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("Create each FILE that does not exist; existing files are left untouched."),
                OutputLine::output("  -c    do not create any files"),
            ];
        }

        let mut no_create = false;
        let mut files: Vec<String> = Vec::new();
        for arg in &ctx.args {
            match arg.as_str() {
                "-c" | "--no-create" => no_create = true,
                // 时间戳选项在内存文件系统中没有意义
                "-a" | "-m" => {}
                _ => files.push(arg.clone()),
            }
        }

        if files.is_empty() {
            return vec![OutputLine::error("touch: missing file operand")];
        }

        let mut out = Vec::new();
        for file in &files {
            let path = ctx.resolve(file);
            match ctx.fs.lookup(&path) {
                Some(EntryRef::File(_)) | Some(EntryRef::Folder(_)) => continue,
                None if no_create => continue,
                None => {}
            }
            if let Err(err) = ctx.fs.create_file(&path.to_key(), "") {
                out.push(OutputLine::error(format!("touch: cannot touch '{}': {}", file, err.reason())));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::Fixture;

    #[test]
    fn test_touch_creates_empty_file() {
        let mut fx = Fixture::new();
        assert!(fx.run(&TouchCommand, &["notes.md"]).is_empty());
        assert_eq!(fx.fs.read_file("notes.md"), Some(""));
    }

    #[test]
    fn test_touch_keeps_existing_content() {
        let mut fx = Fixture::new();
        let version = fx.fs.version();
        assert!(fx.run(&TouchCommand, &["README.md"]).is_empty());
        assert_eq!(fx.fs.version(), version);
        assert!(fx.fs.read_file("README.md").is_some_and(|c| c.starts_with("# Portfolio")));
    }

    #[test]
    fn test_touch_relative_to_cwd() {
        let mut fx = Fixture::new();
        fx.cwd = crate::fs::VfsPath::parse("src");
        fx.run(&TouchCommand, &["new.ts"]);
        assert_eq!(fx.fs.read_file("src/new.ts"), Some(""));
    }

    #[test]
    fn test_touch_errors() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&TouchCommand, &[])[0].text, "touch: missing file operand");
        let out = fx.run(&TouchCommand, &["README.md/x"]);
        assert_eq!(out[0].text, "touch: cannot touch 'README.md/x': Not a directory");
        assert!(fx.run(&TouchCommand, &["-c", "ghost"]).is_empty());
        assert!(fx.fs.read_file("ghost").is_none());
    }
}
