//! Search Engine
//!
//! Full-text search over the flat file list. One pattern is compiled per
//! call; results come back in encounter order (file, line, match) and the
//! scan stops as soon as `max_results` is reached.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fs::FlatFile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub whole_word: bool,
    pub regex: bool,
    pub max_results: usize,
    pub context_lines: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { case_sensitive: false, whole_word: false, regex: false, max_results: 50, context_lines: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Relative key of the file, e.g. `src/main.ts`.
    pub file_path: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
    /// The matching line, trimmed.
    pub content: String,
    #[serde(rename = "match")]
    pub matched: String,
    pub context_before: Vec<String>,
    pub context_after: Vec<String>,
}

/// Compile the query. Literal queries are escaped; an invalid regex gives `None`.
pub fn build_pattern(query: &str, options: &SearchOptions) -> Option<Regex> {
    let mut pattern = if options.regex { query.to_string() } else { regex_lite::escape(query) };
    if options.whole_word {
        pattern = format!(r"\b(?:{})\b", pattern);
    }
    if !options.case_sensitive {
        pattern = format!("(?i){}", pattern);
    }
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            debug!(query, error = %err, "invalid search pattern");
            None
        }
    }
}

pub fn search(files: &[FlatFile], query: &str, options: &SearchOptions) -> Vec<SearchResult> {
    let mut results = Vec::new();
    if query.is_empty() || options.max_results == 0 {
        return results;
    }
    let Some(pattern) = build_pattern(query, options) else {
        return results;
    };

    'files: for file in files {
        let lines: Vec<&str> = file.content.lines().collect();
        for (index, line) in lines.iter().enumerate() {
            for found in pattern.find_iter(line) {
                if found.as_str().is_empty() {
                    break;
                }
                results.push(SearchResult {
                    file_path: file.key(),
                    line: index + 1,
                    column: line[..found.start()].chars().count() + 1,
                    content: line.trim().to_string(),
                    matched: found.as_str().to_string(),
                    context_before: context(&lines, index.saturating_sub(options.context_lines), index),
                    context_after: context(&lines, index + 1, index + 1 + options.context_lines),
                });
                if results.len() >= options.max_results {
                    break 'files;
                }
            }
        }
    }

    debug!(query, results = results.len(), "search complete");
    results
}

fn context(lines: &[&str], start: usize, end: usize) -> Vec<String> {
    let end = end.min(lines.len());
    if start >= end {
        return Vec::new();
    }
    lines[start..end].iter().map(|l| l.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VfsPath;

    fn flat(path: &str, content: &str) -> FlatFile {
        FlatFile { path: VfsPath::parse(path), kind: "text".to_string(), content: content.to_string() }
    }

    fn make_files() -> Vec<FlatFile> {
        vec![
            flat("a.md", "todo one\nnothing\n  TODO two todo\n"),
            flat("src/b.ts", "const x = 1;\n// todo: three\n"),
        ]
    }

    #[test]
    fn test_defaults() {
        let options = SearchOptions::default();
        assert!(!options.case_sensitive);
        assert!(!options.whole_word);
        assert!(!options.regex);
        assert_eq!(options.max_results, 50);
        assert_eq!(options.context_lines, 2);
    }

    #[test]
    fn test_encounter_order() {
        let results = search(&make_files(), "todo", &SearchOptions::default());
        let positions: Vec<(String, usize, usize)> =
            results.iter().map(|r| (r.file_path.clone(), r.line, r.column)).collect();
        assert_eq!(
            positions,
            vec![
                ("a.md".to_string(), 1, 1),
                ("a.md".to_string(), 3, 3),
                ("a.md".to_string(), 3, 12),
                ("src/b.ts".to_string(), 2, 4),
            ]
        );
        assert_eq!(results[1].content, "TODO two todo");
        assert_eq!(results[1].matched, "TODO");
    }

    #[test]
    fn test_bounded_by_max_results() {
        let files = make_files();
        let total = search(&files, "todo", &SearchOptions::default()).len();
        for k in 0..=total + 2 {
            let options = SearchOptions { max_results: k, ..SearchOptions::default() };
            assert_eq!(search(&files, "todo", &options).len(), k.min(total));
        }
    }

    #[test]
    fn test_stops_mid_line() {
        let options = SearchOptions { max_results: 2, ..SearchOptions::default() };
        let results = search(&make_files(), "todo", &options);
        assert_eq!(results.last().map(|r| (r.line, r.column)), Some((3, 3)));
    }

    #[test]
    fn test_case_sensitive() {
        let options = SearchOptions { case_sensitive: true, ..SearchOptions::default() };
        let results = search(&make_files(), "TODO", &options);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_literal_query_is_escaped() {
        let files = vec![flat("a.txt", "a.b\naxb\n")];
        assert_eq!(search(&files, "a.b", &SearchOptions::default()).len(), 1);
        let regex = SearchOptions { regex: true, ..SearchOptions::default() };
        assert_eq!(search(&files, "a.b", &regex).len(), 2);
    }

    #[test]
    fn test_whole_word() {
        let files = vec![flat("a.txt", "cat catalog cat\n")];
        let options = SearchOptions { whole_word: true, ..SearchOptions::default() };
        assert_eq!(search(&files, "cat", &options).len(), 2);
    }

    #[test]
    fn test_invalid_regex_yields_nothing() {
        let options = SearchOptions { regex: true, ..SearchOptions::default() };
        assert!(search(&make_files(), "(unclosed", &options).is_empty());
    }

    #[test]
    fn test_empty_match_does_not_loop() {
        let options = SearchOptions { regex: true, ..SearchOptions::default() };
        assert!(search(&make_files(), "x*", &options).len() <= 1);
        assert!(search(&make_files(), "", &SearchOptions::default()).is_empty());
    }

    #[test]
    fn test_context_lines() {
        let files = vec![flat("a.txt", "1\n2\n3\nhit\n5\n6\n7\n")];
        let results = search(&files, "hit", &SearchOptions::default());
        assert_eq!(results[0].context_before, vec!["2", "3"]);
        assert_eq!(results[0].context_after, vec!["5", "6"]);

        let none = SearchOptions { context_lines: 0, ..SearchOptions::default() };
        assert!(search(&files, "hit", &none)[0].context_before.is_empty());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let results = search(&make_files(), "three", &SearchOptions::default());
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["filePath"], "src/b.ts");
        assert_eq!(json["match"], "three");
        assert!(json.get("contextBefore").is_some());
    }
}
