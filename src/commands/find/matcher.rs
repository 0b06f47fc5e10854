use glob::{MatchOptions, Pattern};

/// Entry kind selected by `-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
}

/// Tests combined with an implicit AND.
#[derive(Debug, Default)]
pub struct FindFilter {
    pub name: Option<(Pattern, bool)>,
    pub file_type: Option<FileType>,
    pub max_depth: Option<usize>,
    pub min_depth: usize,
}

/// What the filter sees for one entry.
pub struct EvalContext<'a> {
    pub name: &'a str,
    pub is_directory: bool,
    pub depth: usize,
}

impl FindFilter {
    pub fn matches(&self, ctx: &EvalContext<'_>) -> bool {
        if ctx.depth < self.min_depth {
            return false;
        }
        if let Some((pattern, case_insensitive)) = &self.name {
            let options = MatchOptions { case_sensitive: !case_insensitive, ..MatchOptions::new() };
            if !pattern.matches_with(ctx.name, options) {
                return false;
            }
        }
        match self.file_type {
            Some(FileType::File) => !ctx.is_directory,
            Some(FileType::Directory) => ctx.is_directory,
            None => true,
        }
    }

    /// Whether the walk should descend below `depth`.
    pub fn descend(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_directory: bool) -> EvalContext<'_> {
        EvalContext { name, is_directory, depth: 1 }
    }

    #[test]
    fn test_name_glob() {
        let filter = FindFilter { name: Some((Pattern::new("*.ts").unwrap(), false)), ..FindFilter::default() };
        assert!(filter.matches(&entry("main.ts", false)));
        assert!(!filter.matches(&entry("main.TS", false)));
        assert!(!filter.matches(&entry("README.md", false)));
    }

    #[test]
    fn test_iname_ignores_case() {
        let filter = FindFilter { name: Some((Pattern::new("readme*").unwrap(), true)), ..FindFilter::default() };
        assert!(filter.matches(&entry("README.md", false)));
    }

    #[test]
    fn test_type_and_depth() {
        let filter = FindFilter { file_type: Some(FileType::Directory), max_depth: Some(1), ..FindFilter::default() };
        assert!(filter.matches(&entry("src", true)));
        assert!(!filter.matches(&entry("a.md", false)));
        assert!(filter.descend(0));
        assert!(!filter.descend(1));
    }
}
