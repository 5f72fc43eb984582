//! テストフィクスチャ管理

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// 一時ディレクトリ上のフィクスチャ
#[allow(dead_code)]
pub struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::Builder::new().prefix("dirlist_test").tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `size` バイトのファイルを作成
    pub fn file(&self, rel: &str, size: usize) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, vec![b'x'; size]).unwrap();
        path
    }

    /// ディレクトリを作成
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    #[cfg(unix)]
    pub fn symlink(&self, target: &str, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        std::os::unix::fs::symlink(target, &path).unwrap();
        path
    }
}

/// `a.txt` (500 B), `.hidden` (10 B), `sub/` with two children.
#[allow(dead_code)]
pub fn sample_workspace() -> Workspace {
    let ws = Workspace::new();
    ws.file("a.txt", 500);
    ws.file(".hidden", 10);
    ws.file("sub/one", 1);
    ws.file("sub/two", 2);
    ws
}

/// Non-empty lines of a columns listing.
#[allow(dead_code)]
pub fn listed_lines(output: &str) -> Vec<&str> {
    output.lines().filter(|l| !l.is_empty()).collect()
}

/// Whitespace-separated fields of the line ending in `name`.
#[allow(dead_code)]
pub fn fields_for<'a>(output: &'a str, name: &str) -> Vec<&'a str> {
    output
        .lines()
        .find(|l| l.ends_with(name))
        .unwrap_or_else(|| panic!("no line for {name} in:\n{output}"))
        .split_whitespace()
        .collect()
}
