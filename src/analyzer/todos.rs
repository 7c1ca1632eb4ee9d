use regex::{Regex, RegexBuilder};
use std::path::Path;
use crate::analyzer::read_source;
use crate::analyzer::types::{FileEntry, TodoItem, TodoReport};

pub const TODO_MARKERS: &[&str] = &["TODO", "FIXME", "HACK", "XXX"];
pub const NO_DESCRIPTION: &str = "(no description)";

/// Finds marker comments line by line. Several markers on one line each
/// produce an item; a marker's text stops where the next marker begins.
pub struct TodoScanner {
    pattern: Regex,
}

impl Default for TodoScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoScanner {
    pub fn new() -> Self {
        let alternatives = TODO_MARKERS.join("|");
        // ASCII word boundaries and ASCII case folding only
        let pattern = RegexBuilder::new(&format!(r"\b(?:{alternatives})\b"))
            .case_insensitive(true)
            .unicode(false)
            .build()
            .expect("valid marker regex");
        Self { pattern }
    }

    /// Unreadable files produce no items.
    pub fn scan_file(&self, file: &FileEntry, root: &Path) -> Vec<TodoItem> {
        match read_source(&file.path) {
            Some(content) => self.scan_text(&file.relative_to(root), &content),
            None => Vec::new(),
        }
    }

    pub fn scan_text(&self, file: &str, content: &str) -> Vec<TodoItem> {
        let mut items = Vec::new();

        for (index, line) in content.split('\n').enumerate() {
            let markers: Vec<_> = self.pattern.find_iter(line).collect();

            for (i, marker) in markers.iter().enumerate() {
                let text_end = markers.get(i + 1).map_or(line.len(), |next| next.start());
                let text = line[marker.end()..text_end]
                    .trim_start_matches(|c: char| c == ':' || c.is_whitespace())
                    .trim();

                items.push(TodoItem {
                    file: file.to_string(),
                    line: index + 1,
                    kind: marker.as_str().to_uppercase(),
                    text: if text.is_empty() {
                        NO_DESCRIPTION.to_string()
                    } else {
                        text.to_string()
                    },
                });
            }
        }

        items
    }
}

/// Scans every file, keeping only `filter` (case-insensitive) when one is given.
pub fn summarize_todos(
    scanner: &TodoScanner,
    root: &Path,
    files: &[FileEntry],
    filter: Option<&str>,
) -> TodoReport {
    let filter = filter.map(str::to_uppercase);

    let items = files
        .iter()
        .flat_map(|file| scanner.scan_file(file, root))
        .filter(|item| filter.as_ref().map_or(true, |kind| &item.kind == kind))
        .collect();

    TodoReport { filter, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_two_markers_on_one_line() {
        let scanner = TodoScanner::new();
        let items = scanner.scan_text("a.ts", "// TODO: a FIXME: b");

        assert_eq!(items.len(), 2);
        assert_eq!((items[0].kind.as_str(), items[0].text.as_str()), ("TODO", "a"));
        assert_eq!((items[1].kind.as_str(), items[1].text.as_str()), ("FIXME", "b"));
        assert!(items.iter().all(|item| item.line == 1));
    }

    #[test]
    fn test_case_is_normalized() {
        let scanner = TodoScanner::new();
        let items = scanner.scan_text("a.py", "# todo: lower\n# Hack around it");
        assert_eq!(items[0].kind, "TODO");
        assert_eq!(items[0].text, "lower");
        assert_eq!(items[1].kind, "HACK");
        assert_eq!(items[1].text, "around it");
        assert_eq!(items[1].line, 2);
    }

    #[test]
    fn test_empty_text_gets_placeholder() {
        let scanner = TodoScanner::new();
        let items = scanner.scan_text("a.rs", "// XXX:   \n// FIXME");
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.text == NO_DESCRIPTION));
    }

    #[test]
    fn test_word_boundary_required() {
        let scanner = TodoScanner::new();
        let items = scanner.scan_text("a.js", "let todos = []; // XXXL size\nconst hackathon = 1;");
        assert!(items.is_empty());
    }

    #[test]
    fn test_unreadable_file_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let scanner = TodoScanner::new();
        let missing = FileEntry::new(dir.path().join("gone.rs"));
        assert!(scanner.scan_file(&missing, dir.path()).is_empty());
    }

    #[test]
    fn test_markers_next_to_non_ascii() {
        let scanner = TodoScanner::new();

        let items = scanner.scan_text("a", "//éTODO: x");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, "TODO");
        assert_eq!(items[0].text, "x");

        // Kelvin sign does not fold to ASCII k
        assert!(scanner.scan_text("a", "// HAC\u{212A} nope").is_empty());
    }

    #[test]
    fn test_items_use_relative_paths() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        let path = dir.path().join("src/lib.rs");
        fs::write(&path, "fn a() {}\n\n// TODO: wire up\n").unwrap();

        let scanner = TodoScanner::new();
        let items = scanner.scan_file(&FileEntry::new(path), dir.path());
        assert_eq!(items, vec![TodoItem {
            file: "src/lib.rs".to_string(),
            line: 3,
            kind: "TODO".to_string(),
            text: "wire up".to_string(),
        }]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.go");
        fs::write(&path, "// TODO: one\n// FIXME: two\n// fixme: three").unwrap();

        let scanner = TodoScanner::new();
        let files = vec![FileEntry::new(path)];
        let report = summarize_todos(&scanner, dir.path(), &files, Some("fixme"));
        assert_eq!(report.filter.as_deref(), Some("FIXME"));
        assert_eq!(report.items.len(), 2);
        assert!(report.items.iter().all(|item| item.kind == "FIXME"));

        let all = summarize_todos(&scanner, dir.path(), &files, None);
        assert_eq!(all.items.len(), 3);
    }
}
