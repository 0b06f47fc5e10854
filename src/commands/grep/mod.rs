// src/commands/grep/mod.rs
use crate::commands::types::operand_error;
use crate::commands::{Command, CommandContext};
use crate::fs::{EntryRef, FlatFile, FsError};
use crate::output::OutputLine;
use crate::search::{build_pattern, search, SearchOptions, SearchResult};

pub struct GrepCommand;

#[derive(Default)]
struct GrepOptions {
    pattern: String,
    ignore_case: bool,
    whole_word: bool,
    extended: bool,
    recursive: bool,
    line_number: bool,
    count_only: bool,
    files_with_matches: bool,
    max_count: Option<usize>,
    paths: Vec<String>,
}

fn parse_grep_args(args: &[String]) -> Result<GrepOptions, String> {
    let mut opts = GrepOptions::default();
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "-e" && i + 1 < args.len() {
            i += 1;
            positional.insert(0, args[i].clone());
        } else if arg == "-m" && i + 1 < args.len() {
            i += 1;
            opts.max_count = Some(args[i].parse().map_err(|_| format!("invalid max count '{}'", args[i]))?);
        } else if arg.len() > 1 && arg.starts_with('-') && !arg.starts_with("--") {
            for c in arg[1..].chars() {
                match c {
                    'i' => opts.ignore_case = true,
                    'w' => opts.whole_word = true,
                    'E' => opts.extended = true,
                    'F' => opts.extended = false,
                    'r' | 'R' => opts.recursive = true,
                    'n' => opts.line_number = true,
                    'c' => opts.count_only = true,
                    'l' => opts.files_with_matches = true,
                    other => return Err(format!("invalid option -- '{}'", other)),
                }
            }
        } else {
            match arg.as_str() {
                "--ignore-case" => opts.ignore_case = true,
                "--word-regexp" => opts.whole_word = true,
                "--extended-regexp" => opts.extended = true,
                "--recursive" => opts.recursive = true,
                "--line-number" => opts.line_number = true,
                "--count" => opts.count_only = true,
                "--files-with-matches" => opts.files_with_matches = true,
                _ if arg.starts_with("--") => return Err(format!("unrecognized option '{}'", arg)),
                _ => positional.push(arg.clone()),
            }
        }
        i += 1;
    }

    if positional.is_empty() {
        return Err("missing pattern".to_string());
    }
    opts.pattern = positional.remove(0);
    opts.paths = positional;
    Ok(opts)
}

/// Files to search, in argument order. A folder contributes every file
/// beneath it, in flat-list order.
fn collect_files(ctx: &CommandContext<'_>, opts: &GrepOptions, errors: &mut Vec<OutputLine>) -> Vec<FlatFile> {
    let all = ctx.fs.files();
    if opts.paths.is_empty() {
        return all.iter().filter(|f| f.path.starts_with(ctx.cwd)).cloned().collect();
    }

    let mut files = Vec::new();
    for arg in &opts.paths {
        let path = ctx.resolve(arg);
        match ctx.fs.lookup(&path) {
            Some(EntryRef::File(_)) => files.extend(all.iter().filter(|f| f.path == path).cloned()),
            Some(EntryRef::Folder(_)) => files.extend(all.iter().filter(|f| f.path.starts_with(&path)).cloned()),
            None => errors.push(operand_error("grep", arg, &FsError::not_found(&path, "open"))),
        }
    }
    files
}

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn description(&self) -> &'static str {
        "Search file contents for a pattern"
    }

    fn usage(&self) -> &'static str {
        "grep [-i] [-w] [-E] [-r] [-n] [-c] [-l] [-m N] pattern [path...]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("  -i    ignore case"),
                OutputLine::output("  -w    match whole words"),
                OutputLine::output("  -E    treat the pattern as a regular expression"),
                OutputLine::output("  -r    search folders recursively"),
                OutputLine::output("  -n    prefix each line with its line number"),
                OutputLine::output("  -c    print a count of matching lines per file"),
                OutputLine::output("  -l    print only names of files with matches"),
                OutputLine::output("  -m N  stop after N matching lines"),
            ];
        }

        let opts = match parse_grep_args(&ctx.args) {
            Ok(o) => o,
            Err(msg) if msg == "missing pattern" => {
                return vec![OutputLine::error(format!("usage: {}", self.usage()))];
            }
            Err(msg) => return vec![OutputLine::error(format!("grep: {}", msg))],
        };

        // grep reports every match; the listing cap is applied per line below.
        let options = SearchOptions {
            case_sensitive: !opts.ignore_case,
            whole_word: opts.whole_word,
            regex: opts.extended,
            max_results: usize::MAX,
            context_lines: 0,
        };
        if build_pattern(&opts.pattern, &options).is_none() {
            return vec![OutputLine::error(format!("grep: invalid regular expression '{}'", opts.pattern))];
        }

        let mut out = Vec::new();
        let files = collect_files(ctx, &opts, &mut out);
        let results = search(&files, &opts.pattern, &options);
        let matching = matching_lines(&results);

        if matching.is_empty() {
            out.push(OutputLine::output(format!("grep: no matches found for \"{}\"", opts.pattern)));
            return out;
        }

        let show_names = files.len() > 1 || opts.recursive;
        let selected = &matching[..opts.max_count.map_or(matching.len(), |m| m.min(matching.len()))];

        if opts.files_with_matches || opts.count_only {
            let mut counts: Vec<(&str, usize)> = Vec::new();
            for r in selected {
                match counts.last_mut() {
                    Some((file, n)) if *file == r.file_path => *n += 1,
                    _ => counts.push((r.file_path.as_str(), 1)),
                }
            }
            for (file, n) in counts {
                let text = if opts.files_with_matches {
                    file.to_string()
                } else if show_names {
                    format!("{}:{}", file, n)
                } else {
                    n.to_string()
                };
                out.push(OutputLine::output(text));
            }
            return out;
        }

        let limit = opts.max_count.unwrap_or(ctx.config.search_max_results);
        for r in selected.iter().take(limit) {
            let mut text = String::new();
            if show_names {
                text.push_str(&r.file_path);
                text.push(':');
            }
            if opts.line_number {
                text.push_str(&format!("{}:", r.line));
            }
            text.push_str(&r.content);
            out.push(OutputLine::output(text));
        }
        if selected.len() > limit {
            out.push(OutputLine::output(format!(
                "grep: showing the first {} of {} matching lines (use -m N to change)",
                limit,
                selected.len()
            )));
        }
        out
    }
}

/// First result of every matching source line, in encounter order.
fn matching_lines(results: &[SearchResult]) -> Vec<&SearchResult> {
    let mut lines: Vec<&SearchResult> = Vec::new();
    for r in results {
        match lines.last() {
            Some(prev) if prev.file_path == r.file_path && prev.line == r.line => {}
            _ => lines.push(r),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{texts, Fixture};
    use crate::fs::{Entity, File, Folder, VirtualFs};

    fn make_fixture() -> Fixture {
        Fixture::with_fs(VirtualFs::new(Folder::with_children(
            "",
            vec![
                Entity::File(File::new("file.ts", "const a = 1;\nconst b = 2;\n")),
                Entity::Folder(Folder::with_children(
                    "src",
                    vec![
                        Entity::File(File::new("main.ts", "// TODO: boot\nboot(); // todo later\n")),
                        Entity::File(File::new("util.ts", "export const todo = [];\n")),
                    ],
                )),
            ],
        )))
    }

    #[test]
    fn test_grep_no_match_is_informational() {
        let mut fx = make_fixture();
        let out = fx.run(&GrepCommand, &["TODO", "file.ts"]);
        assert_eq!(out.len(), 1);
        assert!(!out[0].is_error());
        assert_eq!(out[0].text, "grep: no matches found for \"TODO\"");
    }

    #[test]
    fn test_grep_single_file() {
        let mut fx = make_fixture();
        let out = fx.run(&GrepCommand, &["-n", "b", "file.ts"]);
        assert_eq!(texts(&out), vec!["2:const b = 2;"]);
    }

    #[test]
    fn test_grep_case_sensitive_by_default() {
        let mut fx = make_fixture();
        let out = fx.run(&GrepCommand, &["TODO", "src"]);
        assert_eq!(texts(&out), vec!["src/main.ts:// TODO: boot"]);
    }

    #[test]
    fn test_grep_ignore_case_under_cwd() {
        let mut fx = make_fixture();
        let out = fx.run(&GrepCommand, &["-i", "todo"]);
        assert_eq!(
            texts(&out),
            vec!["src/main.ts:// TODO: boot", "src/main.ts:boot(); // todo later", "src/util.ts:export const todo = [];"]
        );
    }

    #[test]
    fn test_grep_count_and_files() {
        let mut fx = make_fixture();
        assert_eq!(texts(&fx.run(&GrepCommand, &["-ic", "todo", "src"])), vec!["src/main.ts:2", "src/util.ts:1"]);
        assert_eq!(texts(&fx.run(&GrepCommand, &["-il", "todo"])), vec!["src/main.ts", "src/util.ts"]);
    }

    #[test]
    fn test_grep_regex_and_whole_word() {
        let mut fx = make_fixture();
        assert_eq!(fx.run(&GrepCommand, &["-E", "const [ab]", "file.ts"]).len(), 2);
        assert_eq!(fx.run(&GrepCommand, &["-E", "const [ab", "file.ts"])[0].text, "grep: invalid regular expression 'const [ab'");
        let out = fx.run(&GrepCommand, &["-w", "boot", "src/main.ts"]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_grep_max_count() {
        let mut fx = make_fixture();
        let out = fx.run(&GrepCommand, &["-i", "-m", "1", "todo"]);
        assert_eq!(out.len(), 1);
    }

    fn many_lines_fixture(lines: usize) -> Fixture {
        let content: String = "x\n".repeat(lines);
        Fixture::with_fs(VirtualFs::new(Folder::with_children(
            "",
            vec![Entity::File(File::new("many.txt", content)), Entity::File(File::new("pair.txt", "ab ab\nab\n"))],
        )))
    }

    #[test]
    fn test_grep_count_is_not_capped() {
        let mut fx = many_lines_fixture(80);
        assert_eq!(texts(&fx.run(&GrepCommand, &["-c", "x", "many.txt"])), vec!["80"]);
        assert_eq!(texts(&fx.run(&GrepCommand, &["-l", "x", "many.txt"])), vec!["many.txt"]);
    }

    #[test]
    fn test_grep_listing_reports_truncation() {
        let mut fx = many_lines_fixture(80);
        let out = fx.run(&GrepCommand, &["x", "many.txt"]);
        assert_eq!(out.len(), 51);
        assert_eq!(out[50].text, "grep: showing the first 50 of 80 matching lines (use -m N to change)");
        assert_eq!(fx.run(&GrepCommand, &["-m", "70", "x", "many.txt"]).len(), 70);
    }

    #[test]
    fn test_grep_max_count_counts_lines() {
        let mut fx = many_lines_fixture(3);
        let out = fx.run(&GrepCommand, &["-n", "-m", "2", "ab", "pair.txt"]);
        assert_eq!(texts(&out), vec!["1:ab ab", "2:ab"]);
        assert_eq!(texts(&fx.run(&GrepCommand, &["-c", "-m", "2", "x", "many.txt"])), vec!["2"]);
    }

    #[test]
    fn test_grep_errors() {
        let mut fx = make_fixture();
        assert!(fx.run(&GrepCommand, &[])[0].text.starts_with("usage: grep"));
        let out = fx.run(&GrepCommand, &["x", "missing.ts"]);
        assert_eq!(out[0].text, "grep: missing.ts: No such file or directory");
    }
}
