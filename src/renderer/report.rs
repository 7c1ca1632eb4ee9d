use std::fmt::Write;
use crate::analyzer::{ComplexityReport, LineCountReport, TodoItem, TodoReport};

pub const TODO_GROUP_LIMIT: usize = 20;
pub const COMPLEXITY_ROW_LIMIT: usize = 30;
pub const NO_TODOS_MESSAGE: &str = "No TODOs found.";

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

pub fn format_line_report(report: &LineCountReport) -> String {
    let mut output = String::new();

    output.push_str("## Lines of Code Report\n\n");
    output.push_str("| Language | Files | Lines |\n");
    output.push_str("|----------|-------|-------|\n");

    for row in &report.languages {
        let _ = writeln!(
            output,
            "| {} | {} | {} |",
            row.language,
            group_thousands(row.stats.file_count),
            group_thousands(row.stats.total_lines)
        );
    }

    let _ = writeln!(
        output,
        "| **Total** | **{}** | **{}** |",
        group_thousands(report.total_files),
        group_thousands(report.total_lines)
    );

    output
}

pub fn format_todo_report(report: &TodoReport) -> String {
    if report.items.is_empty() {
        return NO_TODOS_MESSAGE.to_string();
    }

    let mut output = format!("## TODO Report ({} items)\n\n", report.items.len());

    for (kind, items) in group_by_kind(&report.items) {
        let _ = writeln!(output, "### {} ({})\n", kind, items.len());

        for item in items.iter().take(TODO_GROUP_LIMIT) {
            let _ = writeln!(output, "- **{}:{}**: {}", item.file, item.line, item.text);
        }
        if items.len() > TODO_GROUP_LIMIT {
            let _ = writeln!(output, "- *({} more...)*", items.len() - TODO_GROUP_LIMIT);
        }
        output.push('\n');
    }

    output
}

pub fn no_complexity_message(threshold: f64) -> String {
    format!("No files found with complexity >= {}", threshold)
}

pub fn format_complexity_report(report: &ComplexityReport) -> String {
    if report.files.is_empty() {
        return no_complexity_message(report.threshold);
    }

    let mut output = String::from("## Complexity Report\n\n");
    let _ = writeln!(output, "Files with estimated complexity >= {}:\n", report.threshold);
    output.push_str("| File | Complexity |\n");
    output.push_str("|------|------------|\n");

    for entry in report.files.iter().take(COMPLEXITY_ROW_LIMIT) {
        let _ = writeln!(output, "| {} | {} |", entry.file, entry.complexity);
    }

    if report.files.len() > COMPLEXITY_ROW_LIMIT {
        let _ = writeln!(output, "\n*({} more files...)*", report.files.len() - COMPLEXITY_ROW_LIMIT);
    }

    output.push_str("\n*Note: Complexity is estimated based on control flow keywords.*");
    output
}

/// Groups in order of first appearance.
fn group_by_kind(items: &[TodoItem]) -> Vec<(&str, Vec<&TodoItem>)> {
    let mut groups: Vec<(&str, Vec<&TodoItem>)> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|(kind, _)| *kind == item.kind) {
            Some((_, members)) => members.push(item),
            None => groups.push((item.kind.as_str(), vec![item])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{ComplexityEntry, LanguageRow, LanguageStats};
    use std::path::PathBuf;

    fn todo(kind: &str, line: usize) -> TodoItem {
        TodoItem {
            file: "src/a.rs".to_string(),
            line,
            kind: kind.to_string(),
            text: format!("item {line}"),
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_line_report_layout() {
        let report = LineCountReport {
            root_path: PathBuf::from("."),
            languages: vec![
                LanguageRow {
                    language: "TypeScript".to_string(),
                    stats: LanguageStats { file_count: 1, total_lines: 1500 },
                },
                LanguageRow {
                    language: "Python".to_string(),
                    stats: LanguageStats { file_count: 1, total_lines: 5 },
                },
            ],
            total_files: 2,
            total_lines: 1505,
        };

        let expected = "## Lines of Code Report\n\n\
            | Language | Files | Lines |\n\
            |----------|-------|-------|\n\
            | TypeScript | 1 | 1,500 |\n\
            | Python | 1 | 5 |\n\
            | **Total** | **2** | **1,505** |\n";
        assert_eq!(format_line_report(&report), expected);
    }

    #[test]
    fn test_empty_todo_report() {
        let report = TodoReport { filter: None, items: vec![] };
        assert_eq!(format_todo_report(&report), "No TODOs found.");
    }

    #[test]
    fn test_todo_groups_follow_first_appearance() {
        let report = TodoReport {
            filter: None,
            items: vec![todo("FIXME", 1), todo("TODO", 2), todo("FIXME", 3)],
        };

        let expected = "## TODO Report (3 items)\n\n\
            ### FIXME (2)\n\n\
            - **src/a.rs:1**: item 1\n\
            - **src/a.rs:3**: item 3\n\n\
            ### TODO (1)\n\n\
            - **src/a.rs:2**: item 2\n\n";
        assert_eq!(format_todo_report(&report), expected);
    }

    #[test]
    fn test_todo_group_truncation() {
        let items = (1..=23).map(|line| todo("HACK", line)).collect();
        let output = format_todo_report(&TodoReport { filter: None, items });

        assert!(output.contains("### HACK (23)"));
        assert!(output.contains("- **src/a.rs:20**: item 20\n"));
        assert!(!output.contains("src/a.rs:21"));
        assert!(output.contains("- *(3 more...)*\n"));
    }

    #[test]
    fn test_empty_complexity_report_names_threshold() {
        let report = ComplexityReport { threshold: 1000.0, files: vec![] };
        assert_eq!(format_complexity_report(&report), "No files found with complexity >= 1000");

        let report = ComplexityReport { threshold: 2.5, files: vec![] };
        assert!(format_complexity_report(&report).ends_with(">= 2.5"));
    }

    #[test]
    fn test_complexity_table_caps_rows() {
        let files = (0..32)
            .map(|i| ComplexityEntry { file: format!("f{i}.js"), complexity: 100 - i })
            .collect();
        let output = format_complexity_report(&ComplexityReport { threshold: 10.0, files });

        assert!(output.starts_with("## Complexity Report\n\nFiles with estimated complexity >= 10:\n\n"));
        assert!(output.contains("| f29.js | 71 |\n"));
        assert!(!output.contains("f30.js"));
        assert!(output.contains("\n*(2 more files...)*\n"));
        assert!(output.ends_with("*Note: Complexity is estimated based on control flow keywords.*"));
    }
}
