use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};
use crate::analyzer::types::FileEntry;

pub const IGNORED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "__pycache__", "venv"];

/// Extension (without the dot) to language label.
pub const SOURCE_EXTENSIONS: &[(&str, &str)] = &[
    ("ts", "TypeScript"),
    ("tsx", "TypeScript/React"),
    ("js", "JavaScript"),
    ("jsx", "JavaScript/React"),
    ("py", "Python"),
    ("go", "Go"),
    ("rs", "Rust"),
    ("java", "Java"),
    ("rb", "Ruby"),
    ("cpp", "C++"),
    ("c", "C"),
];

pub const OTHER_LANGUAGE: &str = "Other";

pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    SOURCE_EXTENSIONS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, language)| *language)
}

/// Language label for an already collected file; unknown extensions map to "Other".
pub fn classify(path: &Path) -> &'static str {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(language_for_extension)
        .unwrap_or(OTHER_LANGUAGE)
}

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| language_for_extension(e).is_some())
        .unwrap_or(false)
}

/// Recursively collects recognized source files under `root`.
///
/// Ignored directories are pruned before descent. Unreadable directories, a
/// missing root or a root that is not a directory all contribute nothing.
/// Entries are visited in file-name order.
pub fn discover_files(root: &Path) -> Vec<FileEntry> {
    let files: Vec<FileEntry> = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_source_file(entry.path()))
        .map(|entry| FileEntry::new(entry.into_path()))
        .collect();

    debug!("discovered {} source files under {}", files.len(), root.display());
    files
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && IGNORED_DIRS.contains(&entry.file_name().to_string_lossy().as_ref())
}
