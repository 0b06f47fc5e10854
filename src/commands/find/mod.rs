pub mod matcher;

use glob::Pattern;

use crate::commands::types::{Command, CommandContext};
use crate::fs::{EntryRef, Folder};
use crate::output::OutputLine;
use matcher::{EvalContext, FileType, FindFilter};

pub struct FindCommand;

fn parse_filter(args: &[String]) -> Result<FindFilter, String> {
    let mut filter = FindFilter::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1).ok_or_else(|| format!("find: missing argument to `{}'", flag))?;
        match flag {
            "-name" | "-iname" => {
                let pattern = Pattern::new(value).map_err(|e| format!("find: invalid pattern '{}': {}", value, e))?;
                filter.name = Some((pattern, flag == "-iname"));
            }
            "-type" => {
                filter.file_type = Some(match value.as_str() {
                    "f" => FileType::File,
                    "d" => FileType::Directory,
                    other => return Err(format!("find: Unknown argument to -type: {}", other)),
                });
            }
            "-maxdepth" | "-mindepth" => {
                let depth = value.parse().map_err(|_| format!("find: invalid depth '{}'", value))?;
                if flag == "-maxdepth" {
                    filter.max_depth = Some(depth);
                } else {
                    filter.min_depth = depth;
                }
            }
            _ => return Err(format!("find: unknown predicate `{}'", flag)),
        }
        i += 2;
    }
    Ok(filter)
}

fn walk(folder: &Folder, label: &str, depth: usize, filter: &FindFilter, out: &mut Vec<OutputLine>) {
    if !filter.descend(depth) {
        return;
    }
    for child in &folder.children {
        let child_label = if label.ends_with('/') {
            format!("{}{}", label, child.name())
        } else {
            format!("{}/{}", label, child.name())
        };
        let ctx = EvalContext { name: child.name(), is_directory: child.is_folder(), depth: depth + 1 };
        if filter.matches(&ctx) {
            out.push(OutputLine::output(child_label.clone()));
        }
        if let EntryRef::Folder(sub) = child.as_entry_ref() {
            walk(sub, &child_label, depth + 1, filter, out);
        }
    }
}

impl Command for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn description(&self) -> &'static str {
        "Search for files and folders by name or type"
    }

    fn usage(&self) -> &'static str {
        "find [path...] [-name glob] [-iname glob] [-type f|d] [-maxdepth N] [-mindepth N]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![OutputLine::output(format!("Usage: {}", self.usage()))];
        }

        // Starting paths are everything before the first predicate.
        let expr_start = ctx.args.iter().position(|a| a.starts_with('-')).unwrap_or(ctx.args.len());
        let mut search_paths: Vec<String> = ctx.args[..expr_start].to_vec();
        if search_paths.is_empty() {
            search_paths.push(".".to_string());
        }

        let filter = match parse_filter(&ctx.args[expr_start..]) {
            Ok(f) => f,
            Err(msg) => return vec![OutputLine::error(msg)],
        };

        let mut out = Vec::new();
        for start in &search_paths {
            let path = ctx.resolve(start);
            match ctx.fs.lookup(&path) {
                Some(EntryRef::Folder(folder)) => {
                    let root = EvalContext { name: path.file_name().unwrap_or("/"), is_directory: true, depth: 0 };
                    if filter.matches(&root) {
                        out.push(OutputLine::output(start.clone()));
                    }
                    walk(folder, start, 0, &filter, &mut out);
                }
                Some(EntryRef::File(file)) => {
                    let entry = EvalContext { name: &file.name, is_directory: false, depth: 0 };
                    if filter.matches(&entry) {
                        out.push(OutputLine::output(start.clone()));
                    }
                }
                None => out.push(OutputLine::error(format!("find: '{}': No such file or directory", start))),
            }
        }
        out
    }
}
