//! Alias Expansion
//!
//! Alias expansion rules:
//! 1. Only the first word of a line is looked up
//! 2. The alias text is split into words and replaces that first word
//! 3. Expansion is single level: if the alias text starts with another
//!    alias name, that name is dispatched literally

use indexmap::IndexMap;
use tracing::debug;

use super::word_expansion::split_words;

/// Check that `name` can be used as an alias name.
pub fn is_valid_alias_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(|c: char| c.is_whitespace() || matches!(c, '=' | '\'' | '"' | '$' | '/'))
}

/// Expand the alias on the first word, if any. The remaining words are
/// appended unchanged after the expansion.
pub fn expand_alias(
    words: Vec<String>,
    aliases: &IndexMap<String, String>,
    env: &IndexMap<String, String>,
) -> Vec<String> {
    let Some(value) = words.first().and_then(|first| aliases.get(first)) else {
        return words;
    };

    debug!(alias = %words[0], expansion = %value, "expanding alias");
    let mut expanded = split_words(value, env);
    expanded.extend(words.into_iter().skip(1));
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_aliases(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_alias() {
        let aliases = make_aliases(&[("ll", "ls -la")]);
        let out = expand_alias(words(&["echo", "ll"]), &aliases, &IndexMap::new());
        assert_eq!(out, vec!["echo", "ll"]);
    }

    #[test]
    fn test_expand_with_arguments() {
        let aliases = make_aliases(&[("ll", "ls -la")]);
        let out = expand_alias(words(&["ll", "docs"]), &aliases, &IndexMap::new());
        assert_eq!(out, vec!["ls", "-la", "docs"]);
    }

    #[test]
    fn test_single_level_only() {
        let aliases = make_aliases(&[("a", "b"), ("b", "c")]);
        let out = expand_alias(words(&["a"]), &aliases, &IndexMap::new());
        assert_eq!(out, vec!["b"]);
    }

    #[test]
    fn test_self_reference_does_not_loop() {
        let aliases = make_aliases(&[("ls", "ls -a")]);
        let out = expand_alias(words(&["ls"]), &aliases, &IndexMap::new());
        assert_eq!(out, vec!["ls", "-a"]);
    }

    #[test]
    fn test_alias_names() {
        assert!(is_valid_alias_name("ll"));
        assert!(is_valid_alias_name(".."));
        assert!(!is_valid_alias_name(""));
        assert!(!is_valid_alias_name("a b"));
        assert!(!is_valid_alias_name("a=b"));
    }
}
