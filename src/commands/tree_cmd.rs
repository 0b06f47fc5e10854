use crate::commands::{Command, CommandContext};
use crate::fs::{EntryRef, Entity, Folder};
use crate::output::OutputLine;

pub struct TreeCommand;

const HELP: &str = "tree - list contents of directories in a tree-like format

Usage: tree [OPTION]... [DIRECTORY]...

Options:
  -a          include hidden files
  -d          list directories only
  -L LEVEL    limit depth of directory tree
  --help      display this help and exit";

#[derive(Default)]
struct TreeOptions {
    show_hidden: bool,
    directories_only: bool,
    max_depth: Option<usize>,
}

#[derive(Default)]
struct Counts {
    dirs: usize,
    files: usize,
}

fn build_tree(folder: &Folder, opts: &TreeOptions, prefix: &str, depth: usize, counts: &mut Counts, out: &mut Vec<OutputLine>) {
    if opts.max_depth.is_some_and(|max| depth >= max) {
        return;
    }
    let entries: Vec<&Entity> = folder
        .children
        .iter()
        .filter(|e| opts.show_hidden || !e.name().starts_with('.'))
        .filter(|e| !opts.directories_only || e.is_folder())
        .collect();

    for (i, entry) in entries.iter().enumerate() {
        let last = i + 1 == entries.len();
        let connector = if last { "└── " } else { "├── " };
        out.push(OutputLine::output(format!("{}{}{}", prefix, connector, entry.name())));
        match entry {
            Entity::Folder(sub) => {
                counts.dirs += 1;
                let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
                build_tree(sub, opts, &child_prefix, depth + 1, counts, out);
            }
            Entity::File(_) => counts.files += 1,
        }
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn description(&self) -> &'static str {
        "Show the directory tree"
    }

    fn usage(&self) -> &'static str {
        "tree [-a] [-d] [-L level] [path]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let mut opts = TreeOptions::default();
        let mut directories = Vec::new();
        let mut i = 0;

        while i < ctx.args.len() {
            match ctx.args[i].as_str() {
                "--help" => return HELP.lines().map(OutputLine::output).collect(),
                "-a" => opts.show_hidden = true,
                "-d" => opts.directories_only = true,
                "-L" => {
                    i += 1;
                    match ctx.args.get(i).and_then(|v| v.parse::<usize>().ok()).filter(|n| *n > 0) {
                        Some(level) => opts.max_depth = Some(level),
                        None => return vec![OutputLine::error("tree: Invalid level, must be greater than 0.")],
                    }
                }
                other => directories.push(other.to_string()),
            }
            i += 1;
        }

        if directories.is_empty() {
            directories.push(".".to_string());
        }

        let mut out = Vec::new();
        let mut counts = Counts::default();
        for dir in &directories {
            let path = ctx.resolve(dir);
            match ctx.fs.lookup(&path) {
                Some(EntryRef::Folder(folder)) => {
                    out.push(OutputLine::output(dir.clone()));
                    build_tree(folder, &opts, "", 0, &mut counts, &mut out);
                }
                Some(EntryRef::File(_)) => {
                    out.push(OutputLine::output(format!("{} [error opening dir]", dir)));
                }
                None => {
                    out.push(OutputLine::error(format!("{} [error opening dir]", dir)));
                }
            }
        }

        out.push(OutputLine::output(""));
        let summary = if opts.directories_only {
            plural(counts.dirs, "directory", "directories")
        } else {
            format!(
                "{}, {}",
                plural(counts.dirs, "directory", "directories"),
                plural(counts.files, "file", "files")
            )
        };
        out.push(OutputLine::output(summary));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{texts, Fixture};

    #[test]
    fn test_tree_of_subfolder() {
        let mut fx = Fixture::new();
        let out = fx.run(&TreeCommand, &["src"]);
        assert_eq!(
            texts(&out),
            vec!["src", "├── main.ts", "├── boot.ts", "└── utils", "    └── format.ts", "", "1 directory, 3 files"]
        );
    }

    #[test]
    fn test_tree_depth_limit_and_dirs_only() {
        let mut fx = Fixture::new();
        let out = fx.run(&TreeCommand, &["-d", "-L", "1"]);
        assert_eq!(texts(&out), vec![".", "├── projects", "└── src", "", "2 directories"]);
    }

    #[test]
    fn test_tree_hidden_entries() {
        let mut fx = Fixture::new();
        let plain = fx.run(&TreeCommand, &["-L", "1"]);
        assert!(!texts(&plain).contains(&"└── .profile"));
        let all = fx.run(&TreeCommand, &["-a", "-L", "1"]);
        assert!(texts(&all).contains(&"└── .profile"));
    }

    #[test]
    fn test_tree_errors() {
        let mut fx = Fixture::new();
        assert!(fx.run(&TreeCommand, &["nope"])[0].is_error());
        assert!(fx.run(&TreeCommand, &["-L", "0"])[0].is_error());
    }
}
