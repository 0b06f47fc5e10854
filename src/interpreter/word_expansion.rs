//! Word Expansion
//!
//! Splits a command line into words and expands variables:
//! - Whitespace separates words outside quotes
//! - Single quotes are literal
//! - Double quotes keep spaces and still expand `$VAR` / `${VAR}`
//! - Backslash escapes the next character (inside double quotes only
//!   `"`, `\` and `$`)
//!
//! Unknown variables expand to nothing, and an unquoted word left empty
//! is dropped. An unterminated quote runs to the end of the line.

use indexmap::IndexMap;

pub fn split_words(input: &str, env: &IndexMap<String, String>) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            _ if c.is_whitespace() => {
                if in_word {
                    push_word(&mut words, &mut current, quoted);
                    in_word = false;
                    quoted = false;
                }
            }
            '\'' => {
                in_word = true;
                quoted = true;
                i += 1;
                while i < chars.len() && chars[i] != '\'' {
                    current.push(chars[i]);
                    i += 1;
                }
            }
            '"' => {
                in_word = true;
                quoted = true;
                i += 1;
                while i < chars.len() && chars[i] != '"' {
                    match chars[i] {
                        '\\' if matches!(chars.get(i + 1), Some('"' | '\\' | '$')) => {
                            current.push(chars[i + 1]);
                            i += 2;
                        }
                        '$' => i = expand_variable(&chars, i, env, &mut current),
                        other => {
                            current.push(other);
                            i += 1;
                        }
                    }
                }
            }
            '\\' => {
                in_word = true;
                quoted = true;
                if let Some(&next) = chars.get(i + 1) {
                    current.push(next);
                    i += 1;
                }
            }
            '$' => {
                in_word = true;
                i = expand_variable(&chars, i, env, &mut current);
                continue;
            }
            other => {
                in_word = true;
                current.push(other);
            }
        }
        i += 1;
    }

    if in_word {
        push_word(&mut words, &mut current, quoted);
    }
    words
}

/// An unquoted word that expanded to nothing is dropped.
fn push_word(words: &mut Vec<String>, current: &mut String, quoted: bool) {
    if quoted || !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// Expand the variable starting at `chars[start] == '$'` into `out` and
/// return the index just past it. A `$` not followed by a name stays literal.
fn expand_variable(chars: &[char], start: usize, env: &IndexMap<String, String>, out: &mut String) -> usize {
    let mut i = start + 1;

    if chars.get(i) == Some(&'{') {
        if let Some(len) = chars[i + 1..].iter().position(|&c| c == '}') {
            let name: String = chars[i + 1..i + 1 + len].iter().collect();
            if is_name(&name) {
                out.push_str(env.get(&name).map(|s| s.as_str()).unwrap_or_default());
                return i + len + 2;
            }
        }
        out.push('$');
        return start + 1;
    }

    let name_start = i;
    if chars.get(i).is_some_and(|c| c.is_ascii_alphabetic() || *c == '_') {
        while chars.get(i).is_some_and(|c| c.is_ascii_alphanumeric() || *c == '_') {
            i += 1;
        }
    }
    if i == name_start {
        out.push('$');
        return start + 1;
    }

    let name: String = chars[name_start..i].iter().collect();
    out.push_str(env.get(&name).map(|s| s.as_str()).unwrap_or_default());
    i
}

fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> IndexMap<String, String> {
        let mut env = IndexMap::new();
        env.insert("USER".to_string(), "guest".to_string());
        env.insert("HOME".to_string(), "/".to_string());
        env
    }

    fn split(input: &str) -> Vec<String> {
        split_words(input, &env())
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(split("  ls   -la  docs "), vec!["ls", "-la", "docs"]);
        assert!(split("   ").is_empty());
    }

    #[test]
    fn test_quotes() {
        assert_eq!(split(r#"grep "hello world" a.md"#), vec!["grep", "hello world", "a.md"]);
        assert_eq!(split("echo 'a  $USER'"), vec!["echo", "a  $USER"]);
        assert_eq!(split(r#"echo "" x"#), vec!["echo", "", "x"]);
        assert_eq!(split(r#"echo pre"mid"post"#), vec!["echo", "premidpost"]);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(split(r"cat my\ file.txt"), vec!["cat", "my file.txt"]);
        assert_eq!(split(r#"echo "say \"hi\"""#), vec!["echo", r#"say "hi""#]);
        assert_eq!(split(r#"echo "\$USER""#), vec!["echo", "$USER"]);
    }

    #[test]
    fn test_variable_expansion() {
        assert_eq!(split("echo $USER"), vec!["echo", "guest"]);
        assert_eq!(split("echo ${USER}x"), vec!["echo", "guestx"]);
        assert_eq!(split(r#"echo "hi $USER!""#), vec!["echo", "hi guest!"]);
        assert_eq!(split("echo $MISSING end"), vec!["echo", "end"]);
        assert_eq!(split(r#"echo "$MISSING" end"#), vec!["echo", "", "end"]);
        assert_eq!(split("echo $ 5$"), vec!["echo", "$", "5$"]);
        assert_eq!(split("echo ${bad"), vec!["echo", "${bad"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(split("echo 'open ended"), vec!["echo", "open ended"]);
    }
}
