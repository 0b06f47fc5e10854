//! Conversational Fallback
//!
//! Lines that name no known command are answered here instead of failing.
//! The first keyword rule that matches any word of the line wins.

use crate::output::OutputLine;

struct Rule {
    keywords: &'static [&'static str],
    response: &'static [&'static str],
}

lazy_static::lazy_static! {
    static ref RULES: Vec<Rule> = vec![
        Rule {
            keywords: &["fix", "bug", "bugs", "error", "errors", "debug", "broken"],
            response: &[
                "Looks like you want something fixed.",
                "Try this workflow:",
                "  1. grep -r \"TODO\" src     find open work",
                "  2. cat <file>              read the suspect code",
                "  3. git diff                review what changed this session",
            ],
        },
        Rule {
            keywords: &["optimize", "optimise", "performance", "perf", "speed", "faster", "slow"],
            response: &[
                "Performance notes for this site:",
                "  - the file view is recomputed only after a write",
                "  - search stops as soon as the result limit is reached",
                "Run `npm run build` to see the production bundle.",
            ],
        },
        Rule {
            keywords: &["hello", "hi", "hey", "howdy", "greetings"],
            response: &[
                "Hello! Welcome to the portfolio terminal.",
                "Type `help` to list commands or `cat README.md` to get started.",
            ],
        },
        Rule {
            keywords: &["who", "about", "whoareyou", "bio", "resume"],
            response: &[
                "Run `cat about.md` for the short version,",
                "or `ls projects` to browse the work itself.",
            ],
        },
        Rule {
            keywords: &["thanks", "thank", "thx", "cheers"],
            response: &["You're welcome! Happy exploring."],
        },
    ];
}

pub fn respond(line: &str) -> Vec<OutputLine> {
    let words: Vec<String> = line
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();

    if let Some(rule) = RULES.iter().find(|rule| words.iter().any(|w| rule.keywords.contains(&w.as_str()))) {
        return rule.response.iter().map(|l| OutputLine::output(*l)).collect();
    }

    let command = line.split_whitespace().next().unwrap_or_default();
    vec![OutputLine::output(format!(
        "{}: command not recognized. Type 'help' to see available commands.",
        command
    ))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputKind;

    #[test]
    fn test_keyword_response() {
        let lines = respond("please fix the login bug");
        assert!(lines.len() > 1);
        assert!(lines[0].text.contains("fixed"));
        assert!(lines.iter().all(|l| l.kind == OutputKind::Output));
    }

    #[test]
    fn test_greeting_is_case_insensitive() {
        assert!(respond("HELLO there")[0].text.starts_with("Hello!"));
    }

    #[test]
    fn test_keywords_match_whole_words() {
        let lines = respond("this thing");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "this: command not recognized. Type 'help' to see available commands.");
    }

    #[test]
    fn test_unknown_is_not_an_error() {
        let lines = respond("frobnicate --now");
        assert!(!lines[0].is_error());
        assert!(lines[0].text.starts_with("frobnicate:"));
    }
}
