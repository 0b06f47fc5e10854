//! git (simulated)
//!
//! The base tree plays the role of `HEAD` and the mutation journal the role
//! of the working tree, so `status` and `diff` show the edits made in this
//! session.

use similar::{ChangeTag, TextDiff};

use crate::commands::{Command, CommandContext};
use crate::fs::{Change, ChangeKind};
use crate::output::OutputLine;

pub struct GitCommand;

const BRANCH: &str = "main";

const LOG: &[(&str, &str, &str)] = &[
    ("a1b2c3d", "Tue Feb 27 18:04:11 2024", "Add command history and autocomplete"),
    ("9f8e7d6", "Mon Feb 19 10:22:45 2024", "Layer journal over the base tree"),
    ("4c5d6e7", "Fri Feb 9 16:40:02 2024", "Render the file tree"),
    ("0a1b2c3", "Thu Feb 1 09:00:00 2024", "Initial commit"),
];

fn status(changes: &[Change]) -> Vec<OutputLine> {
    let mut out = vec![OutputLine::output(format!("On branch {}", BRANCH))];
    if changes.is_empty() {
        out.push(OutputLine::output("nothing to commit, working tree clean"));
        return out;
    }

    let tracked: Vec<&Change> = changes.iter().filter(|c| c.kind != ChangeKind::Added).collect();
    let untracked: Vec<&Change> = changes.iter().filter(|c| c.kind == ChangeKind::Added).collect();

    if !tracked.is_empty() {
        out.push(OutputLine::output("Changes not staged for commit:"));
        out.push(OutputLine::output("  (use \"git add <file>...\" to update what will be committed)"));
        for change in tracked {
            let label = if change.kind == ChangeKind::Deleted { "deleted: " } else { "modified:" };
            out.push(OutputLine::error(format!("\t{}   {}", label, change.path.to_key())));
        }
        out.push(OutputLine::output(""));
    }
    if !untracked.is_empty() {
        out.push(OutputLine::output("Untracked files:"));
        out.push(OutputLine::output("  (use \"git add <file>...\" to include in what will be committed)"));
        for change in untracked {
            out.push(OutputLine::error(format!("\t{}", change.path.to_key())));
        }
        out.push(OutputLine::output(""));
    }
    out.push(OutputLine::output("no changes added to commit (use \"git add\")"));
    out
}

/// Unified diff of one change with 3 lines of context. Added lines are
/// success-styled and removed lines error-styled.
fn diff_change(change: &Change) -> Vec<OutputLine> {
    let key = change.path.to_key();
    let before = change.original.as_deref().unwrap_or_default();
    let after = change.current.as_deref().unwrap_or_default();
    let old_name = if change.original.is_some() { format!("a/{}", key) } else { "/dev/null".to_string() };
    let new_name = if change.current.is_some() { format!("b/{}", key) } else { "/dev/null".to_string() };

    let mut out = vec![OutputLine::output(format!("diff --git a/{} b/{}", key, key))];
    match change.kind {
        ChangeKind::Added => out.push(OutputLine::output("new file mode 100644")),
        ChangeKind::Deleted => out.push(OutputLine::output("deleted file mode 100644")),
        ChangeKind::Modified => {}
    }
    out.push(OutputLine::output(format!("--- {}", old_name)));
    out.push(OutputLine::output(format!("+++ {}", new_name)));

    let diff = TextDiff::from_lines(before, after);
    for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
        out.push(OutputLine::output(hunk.header().to_string()));
        for line in hunk.iter_changes() {
            let text = line.value().trim_end_matches('\n');
            out.push(match line.tag() {
                ChangeTag::Delete => OutputLine::error(format!("-{}", text)),
                ChangeTag::Insert => OutputLine::success(format!("+{}", text)),
                ChangeTag::Equal => OutputLine::output(format!(" {}", text)),
            });
        }
    }
    out
}

fn log(oneline: bool) -> Vec<OutputLine> {
    let mut out = Vec::new();
    for (i, (hash, date, message)) in LOG.iter().enumerate() {
        if oneline {
            out.push(OutputLine::output(format!("{} {}", hash, message)));
            continue;
        }
        let head = if i == 0 { format!(" (HEAD -> {})", BRANCH) } else { String::new() };
        out.push(OutputLine::output(format!("commit {}{}", hash, head)));
        out.push(OutputLine::output("Author: Portfolio Owner <hello@example.dev>"));
        out.push(OutputLine::output(format!("Date:   {}", date)));
        out.push(OutputLine::output(""));
        out.push(OutputLine::output(format!("    {}", message)));
        out.push(OutputLine::output(""));
    }
    out
}

impl Command for GitCommand {
    fn name(&self) -> &'static str {
        "git"
    }

    fn description(&self) -> &'static str {
        "Version control over this session's edits (simulated)"
    }

    fn usage(&self) -> &'static str {
        "git <status|diff [path...]|log [--oneline]|branch>"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let Some(sub) = ctx.args.first().map(String::as_str) else {
            return vec![OutputLine::output(format!("usage: {}", self.usage()))];
        };

        match sub {
            "status" => status(&ctx.fs.changes()),
            "diff" => {
                let filters: Vec<_> = ctx.args[1..].iter().map(|p| ctx.resolve(p)).collect();
                let changes = ctx.fs.changes();
                changes
                    .iter()
                    .filter(|c| filters.is_empty() || filters.iter().any(|f| c.path.starts_with(f)))
                    .flat_map(diff_change)
                    .collect()
            }
            "log" => log(ctx.args.iter().any(|a| a == "--oneline")),
            "branch" => vec![OutputLine::success(format!("* {}", BRANCH))],
            "--version" | "version" => vec![OutputLine::output("git version 2.43.0")],
            "push" | "pull" | "fetch" | "clone" => {
                vec![OutputLine::error("fatal: unable to access remote: network access is disabled in this terminal")]
            }
            other => vec![OutputLine::error(format!("git: '{}' is not a git command. See 'git --help'.", other))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{texts, Fixture};

    #[test]
    fn test_status_clean() {
        let mut fx = Fixture::new();
        assert_eq!(texts(&fx.run(&GitCommand, &["status"])), vec!["On branch main", "nothing to commit, working tree clean"]);
    }

    #[test]
    fn test_status_lists_changes() {
        let mut fx = Fixture::new();
        fx.fs.update_file("README.md", "# Changed\n").unwrap();
        fx.fs.create_file("notes.md", "hi").unwrap();
        fx.fs.delete_file("contact.txt").unwrap();
        let out = fx.run(&GitCommand, &["status"]);
        let text = texts(&out);
        assert!(text.contains(&"\tmodified:   README.md"));
        assert!(text.contains(&"\tdeleted:    contact.txt"));
        assert!(text.contains(&"\tnotes.md"));
    }

    #[test]
    fn test_diff_modified_file() {
        let mut fx = Fixture::new();
        fx.fs.update_file("contact.txt", "email: hello@example.dev\ngithub: github.com/someone\n").unwrap();
        let out = fx.run(&GitCommand, &["diff"]);
        let text = texts(&out);
        assert_eq!(text[0], "diff --git a/contact.txt b/contact.txt");
        assert!(text.contains(&"-github: github.com/example"));
        assert!(text.contains(&"+github: github.com/someone"));
        assert!(text.contains(&" email: hello@example.dev"));
        assert!(out.iter().any(|l| l.text.starts_with('+') && l.kind == crate::output::OutputKind::Success));
    }

    #[test]
    fn test_diff_new_file_and_filter() {
        let mut fx = Fixture::new();
        fx.fs.create_file("notes.md", "hello\n").unwrap();
        fx.fs.update_file("README.md", "x\n").unwrap();
        let out = fx.run(&GitCommand, &["diff", "notes.md"]);
        let text = texts(&out);
        assert_eq!(text[0], "diff --git a/notes.md b/notes.md");
        assert!(text.contains(&"--- /dev/null"));
        assert!(text.contains(&"+hello"));
        assert!(!text.iter().any(|l| l.contains("README")));
    }

    #[test]
    fn test_log_and_branch() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(&GitCommand, &["log", "--oneline"]).len(), LOG.len());
        assert_eq!(fx.run(&GitCommand, &["log"])[0].text, "commit a1b2c3d (HEAD -> main)");
        assert_eq!(texts(&fx.run(&GitCommand, &["branch"])), vec!["* main"]);
    }

    #[test]
    fn test_unknown_subcommand() {
        let mut fx = Fixture::new();
        assert!(fx.run(&GitCommand, &["frob"])[0].is_error());
    }
}
