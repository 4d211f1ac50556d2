// crates/infra/src/filesystem.rs
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use ignore::WalkBuilder;
use wordlist_lines_ports::filesystem::{FileEnumerator, WordlistEntryDto, WordlistEnumerationPlan};
use wordlist_lines_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `FileEnumerator` port.
///
/// Files named directly (on the command line or via `files_from`) are always
/// taken as-is. Directories are walked and filtered by extension.
#[derive(Debug, Default)]
pub struct WalkEnumerator;

impl WalkEnumerator {
    pub fn new() -> Self {
        Self
    }

    pub fn enumerate(plan: &WordlistEnumerationPlan) -> Result<Vec<WordlistEntryDto>> {
        let mut entries = Vec::new();

        for root in initial_roots(plan)? {
            let metadata = fs::metadata(&root).map_err(|source| InfrastructureError::FileSystemOperation {
                operation: "stat".to_string(),
                path: root.clone(),
                source,
            })?;

            if metadata.is_dir() {
                entries.extend(walk_root(&root, plan));
            } else {
                entries.push(WordlistEntryDto { path: root, size: metadata.len() });
            }
        }

        dedup_preserving_order(&mut entries);
        log::debug!("enumerated {} wordlist(s)", entries.len());
        Ok(entries)
    }
}

impl FileEnumerator for WalkEnumerator {
    fn collect(&self, plan: &WordlistEnumerationPlan) -> Result<Vec<WordlistEntryDto>> {
        Self::enumerate(plan)
    }
}

fn initial_roots(plan: &WordlistEnumerationPlan) -> Result<Vec<PathBuf>> {
    let mut roots = plan.roots.clone();
    if let Some(list) = &plan.files_from {
        roots.extend(FileReader::read_path_list(list)?);
    }
    Ok(roots)
}

/// Walk one directory root. Entries come back sorted by file name within
/// each directory so output is deterministic across runs.
fn walk_root(root: &Path, plan: &WordlistEnumerationPlan) -> Vec<WordlistEntryDto> {
    let mut builder = WalkBuilder::new(root);
    builder
        .follow_links(plan.follow_links)
        .hidden(!plan.include_hidden)
        .git_ignore(plan.respect_gitignore)
        .git_global(plan.respect_gitignore)
        .git_exclude(plan.respect_gitignore)
        .ignore(plan.respect_gitignore)
        .parents(plan.respect_gitignore)
        .max_depth(plan.max_depth)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut entries = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("walk error under '{}': {err}", root.display());
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) && !(plan.follow_links && entry.path_is_symlink()) {
            continue;
        }
        if !matches_extension(entry.path(), &plan.extensions) {
            continue;
        }
        match entry.metadata() {
            Ok(metadata) if metadata.is_file() => {
                entries.push(WordlistEntryDto { path: entry.into_path(), size: metadata.len() });
            }
            Ok(_) => {}
            Err(err) => log::warn!("skipping '{}': {err}", entry.path().display()),
        }
    }
    entries
}

/// 拡張子フィルタ (大文字小文字は区別しない)。空なら全て通す
fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(&ext)))
}

/// Order-preserving dedup: the first occurrence wins.
fn dedup_preserving_order(entries: &mut Vec<WordlistEntryDto>) {
    let mut seen: HashSet<PathBuf> = HashSet::with_capacity(entries.len());
    entries.retain(|entry| seen.insert(entry.path.clone()));
}

// ============================================================================
// Tests
// ============================================================================
