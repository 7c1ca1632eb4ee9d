use std::collections::HashMap;
use std::path::Path;
use crate::analyzer::read_source;
use crate::analyzer::types::{FileEntry, LanguageRow, LanguageStats, LineCountReport};

/// Number of `\n`-separated segments in the file. An empty file counts as 1,
/// an unreadable one as 0.
pub fn count_lines(path: &Path) -> usize {
    match read_source(path) {
        Some(content) => content.split('\n').count(),
        None => 0,
    }
}

pub fn summarize_lines(root: &Path, files: &[FileEntry]) -> LineCountReport {
    let mut by_language: HashMap<&'static str, LanguageStats> = HashMap::new();

    for file in files {
        let stats = by_language.entry(file.language()).or_default();
        stats.file_count += 1;
        stats.total_lines += count_lines(&file.path);
    }

    let mut languages: Vec<LanguageRow> = by_language
        .into_iter()
        .map(|(language, stats)| LanguageRow {
            language: language.to_string(),
            stats,
        })
        .collect();

    // ties broken by label so the table does not depend on hash order
    languages.sort_by(|a, b| {
        b.stats.total_lines
            .cmp(&a.stats.total_lines)
            .then_with(|| a.language.cmp(&b.language))
    });

    let total_files = languages.iter().map(|row| row.stats.file_count).sum();
    let total_lines = languages.iter().map(|row| row.stats.total_lines).sum();

    LineCountReport {
        root_path: root.to_path_buf(),
        languages,
        total_files,
        total_lines,
    }
}
