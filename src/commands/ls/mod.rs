// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext};
use crate::fs::{EntryRef, Entity, FsError};
use crate::output::OutputLine;

pub struct LsCommand;

/// Reported size of a folder in long format.
const FOLDER_SIZE: usize = 4096;

#[derive(Default)]
struct LsOptions {
    show_all: bool,
    long_format: bool,
    human_readable: bool,
    reverse: bool,
}

fn format_size(size: usize, human_readable: bool) -> String {
    if !human_readable || size < 1024 {
        return size.to_string();
    }
    if size < 1024 * 1024 {
        let k = size as f64 / 1024.0;
        return if k < 10.0 { format!("{:.1}K", k) } else { format!("{}K", k as u64) };
    }
    let m = size as f64 / (1024.0 * 1024.0);
    if m < 10.0 { format!("{:.1}M", m) } else { format!("{}M", m as u64) }
}

fn long_line(ctx: &CommandContext<'_>, opts: &LsOptions, name: &str, is_folder: bool, size: usize) -> OutputLine {
    let (mode, suffix) = if is_folder { ("drwxr-xr-x", "/") } else { ("-rw-r--r--", "") };
    OutputLine::output(format!(
        "{}  1 {} staff {:>5} {} {}{}",
        mode,
        ctx.user(),
        format_size(size, opts.human_readable),
        ctx.now.format("%b %e %H:%M"),
        name,
        suffix
    ))
}

fn entity_size(entity: &Entity) -> usize {
    match entity {
        Entity::File(f) => f.content.len(),
        Entity::Folder(_) => FOLDER_SIZE,
    }
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn description(&self) -> &'static str {
        "List directory contents"
    }

    fn usage(&self) -> &'static str {
        "ls [-l] [-a] [-h] [-r] [path...]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("  -a    do not ignore entries starting with ."),
                OutputLine::output("  -l    use a long listing format"),
                OutputLine::output("  -h    with -l, print sizes in human readable format"),
                OutputLine::output("  -r    reverse order while sorting"),
            ];
        }

        let mut opts = LsOptions::default();
        let mut paths: Vec<String> = Vec::new();

        for arg in &ctx.args {
            match arg.strip_prefix('-') {
                Some(flags) if !flags.is_empty() => {
                    for c in flags.chars() {
                        match c {
                            'a' | 'A' => opts.show_all = true,
                            'l' => opts.long_format = true,
                            'h' => opts.human_readable = true,
                            'r' => opts.reverse = true,
                            other => return vec![OutputLine::error(format!("ls: invalid option -- '{}'", other))],
                        }
                    }
                }
                _ => paths.push(arg.clone()),
            }
        }

        if paths.is_empty() {
            paths.push(".".to_string());
        }

        let mut lines = Vec::new();
        let show_path_header = paths.len() > 1;

        for (idx, path) in paths.iter().enumerate() {
            let full_path = ctx.resolve(path);

            let folder = match ctx.fs.lookup(&full_path) {
                Some(EntryRef::Folder(folder)) => folder,
                Some(EntryRef::File(file)) => {
                    if opts.long_format {
                        lines.push(long_line(ctx, &opts, path, false, file.content.len()));
                    } else {
                        lines.push(OutputLine::output(path.clone()));
                    }
                    continue;
                }
                None => {
                    let err = FsError::not_found(&full_path, "scandir");
                    lines.push(OutputLine::error(format!("ls: cannot access '{}': {}", path, err.reason())));
                    continue;
                }
            };

            if show_path_header {
                if idx > 0 {
                    lines.push(OutputLine::output(""));
                }
                lines.push(OutputLine::output(format!("{}:", path)));
            }

            let mut entries: Vec<&Entity> =
                folder.children.iter().filter(|e| opts.show_all || !e.name().starts_with('.')).collect();
            // 按名称排序
            entries.sort_by(|a, b| a.name().cmp(b.name()));
            if opts.reverse {
                entries.reverse();
            }

            if opts.long_format {
                lines.push(OutputLine::output(format!("total {}", entries.len())));
                for entry in entries {
                    lines.push(long_line(ctx, &opts, entry.name(), entry.is_folder(), entity_size(entry)));
                }
            } else if !entries.is_empty() {
                let names: Vec<String> = entries
                    .iter()
                    .map(|e| if e.is_folder() { format!("{}/", e.name()) } else { e.name().to_string() })
                    .collect();
                lines.push(OutputLine::output(names.join("  ")));
            }
        }

        lines
    }
}
