//! Autocomplete
//!
//! The mode follows token position: a single token completes command and
//! alias names; a later token after a file-accepting command completes
//! entries of the directory it points into. Everything else completes
//! nothing.

use indexmap::IndexMap;

use crate::commands::CommandRegistry;
use crate::fs::{resolve, EntryRef, VfsPath, VirtualFs};

/// Commands whose arguments complete as paths.
pub const FILE_COMMANDS: &[&str] = &["cat", "open", "head", "tail", "wc", "grep", "cd", "ls"];

pub const MAX_SUGGESTIONS: usize = 8;

/// Command and alias names starting with `prefix`, ignoring case.
pub fn command_suggestions(
    prefix: &str,
    registry: &CommandRegistry,
    aliases: &IndexMap<String, String>,
) -> Vec<String> {
    let wanted = prefix.to_lowercase();
    let mut names: Vec<String> = registry
        .names()
        .into_iter()
        .map(str::to_string)
        .chain(aliases.keys().cloned())
        .filter(|name| name.to_lowercase().starts_with(&wanted))
        .collect();
    names.sort();
    names.dedup();
    names.truncate(MAX_SUGGESTIONS);
    names
}

/// Entries matching the last path segment of `prefix`, ignoring case.
/// A directory part in `prefix` is resolved against `cwd` and kept in the
/// suggestion; folders end with `/`.
pub fn file_suggestions(prefix: &str, cwd: &VfsPath, fs: &VirtualFs) -> Vec<String> {
    let (dir_part, name_part) = match prefix.rfind('/') {
        Some(idx) => prefix.split_at(idx + 1),
        None => ("", prefix),
    };
    let dir = if dir_part.is_empty() { cwd.clone() } else { resolve(cwd, dir_part) };
    let Some(EntryRef::Folder(folder)) = fs.lookup(&dir) else {
        return Vec::new();
    };

    let wanted = name_part.to_lowercase();
    let mut suggestions: Vec<String> = folder
        .children
        .iter()
        .filter(|child| child.name().to_lowercase().starts_with(&wanted))
        .map(|child| {
            let slash = if child.is_folder() { "/" } else { "" };
            format!("{}{}{}", dir_part, child.name(), slash)
        })
        .collect();
    suggestions.sort();
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Suggestions for a partially typed line. Trailing whitespace starts a
/// new, empty token.
pub fn suggest(
    input: &str,
    cwd: &VfsPath,
    fs: &VirtualFs,
    registry: &CommandRegistry,
    aliases: &IndexMap<String, String>,
) -> Vec<String> {
    let mut tokens: Vec<&str> = input.split_whitespace().collect();
    if !tokens.is_empty() && input.ends_with(char::is_whitespace) {
        tokens.push("");
    }

    match tokens.as_slice() {
        [] => Vec::new(),
        [only] => command_suggestions(only, registry, aliases),
        [first, .., last] if FILE_COMMANDS.contains(first) => file_suggestions(last, cwd, fs),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::fs::seed::default_tree;

    fn make_fs() -> VirtualFs {
        VirtualFs::new(default_tree())
    }

    fn run(input: &str) -> Vec<String> {
        let registry = CommandRegistry::with_defaults();
        let aliases = ShellConfig::default().alias_table();
        suggest(input, &VfsPath::root(), &make_fs(), &registry, &aliases)
    }

    #[test]
    fn test_single_token_completes_commands_and_aliases() {
        assert_eq!(run("hi"), vec!["history"]);
        let ls = run("L");
        assert!(ls.contains(&"ls".to_string()));
        assert!(ls.contains(&"ll".to_string()));
        assert!(ls.contains(&"la".to_string()));
    }

    #[test]
    fn test_capped_at_eight() {
        assert_eq!(run("").len(), 0);
        let registry = CommandRegistry::with_defaults();
        let all = command_suggestions("", &registry, &IndexMap::new());
        assert_eq!(all.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_file_command_completes_entries() {
        assert_eq!(run("cat REA"), vec!["README.md"]);
        assert_eq!(run("cd pro"), vec!["projects/"]);
        assert_eq!(run("ls s"), vec!["src/"]);
    }

    #[test]
    fn test_trailing_space_starts_new_token() {
        let all = run("cat ");
        assert!(all.contains(&"README.md".to_string()));
        assert!(all.contains(&"src/".to_string()));
    }

    #[test]
    fn test_path_prefix_is_kept() {
        assert_eq!(run("cat src/ma"), vec!["src/main.ts"]);
        assert_eq!(run("cat src/u"), vec!["src/utils/"]);
        assert!(run("cat nowhere/x").is_empty());
    }

    #[test]
    fn test_other_commands_complete_nothing() {
        assert!(run("echo REA").is_empty());
        assert!(run("git s").is_empty());
    }
}
