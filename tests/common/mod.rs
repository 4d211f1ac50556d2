// tests/common/mod.rs
//! 共通テストユーティリティ

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// A scratch directory of wordlists, removed on drop.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::Builder::new().prefix("wordlists").tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}
