//! ディレクトリ走査
//!
//! 起動時（および再スキャン時）にテーブルへ流し込む行を作る。

use crate::error::{Result, WidgetFactoryError};
use crate::model::FileRow;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Start a recursive walk under `root`.
///
/// The returned [`FileScan`] streams one [`FileRow`] per regular file.
/// A missing root is an error; unreadable entries below it are skipped.
pub fn scan_dir(root: &Path) -> Result<FileScan> {
    if !root.exists() {
        return Err(WidgetFactoryError::FolderNotFound(root.display().to_string()));
    }

    Ok(FileScan {
        root: root.to_path_buf(),
        walker: WalkDir::new(root).sort_by_file_name().into_iter(),
    })
}

/// Collect the whole walk at once.
pub fn scan_to_rows(root: &Path) -> Result<Vec<FileRow>> {
    Ok(scan_dir(root)?.collect())
}

/// Lazy, non-restartable walk over every file under a root.
pub struct FileScan {
    root: PathBuf,
    walker: walkdir::IntoIter,
}

impl Iterator for FileScan {
    type Item = FileRow;

    fn next(&mut self) -> Option<FileRow> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("読めないエントリをスキップ: {err}");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(modified) = modified_text(entry.path()) else {
                debug!("更新時刻を取得できないためスキップ: {}", entry.path().display());
                continue;
            };

            let name = entry.file_name().to_string_lossy().to_string();
            let subdir = self.subdir_of(entry.path());
            return Some(FileRow::new(subdir, name, modified));
        }
    }
}

impl FileScan {
    /// ルートからの相対サブディレクトリ（ルート直下は "."）
    fn subdir_of(&self, path: &Path) -> String {
        let parent = path.parent().unwrap_or(&self.root);
        match parent.strip_prefix(&self.root) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => parent.to_string_lossy().to_string(),
        }
    }
}

fn modified_text(path: &Path) -> Option<String> {
    let modified = std::fs::metadata(path).ok()?.modified().ok()?;
    let local: DateTime<Local> = modified.into();
    Some(local.format("%Y-%m-%d %H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn touch(path: &Path) {
        File::create(path).unwrap().write_all(b"dummy").unwrap();
    }

    #[test]
    fn test_scan_dir_not_found() {
        let result = scan_dir(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(WidgetFactoryError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_dir_empty() {
        let temp_dir = tempfile::tempdir().unwrap();

        let rows = scan_to_rows(temp_dir.path()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_rows_sorted_by_filename() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(&temp_dir.path().join("c.txt"));
        touch(&temp_dir.path().join("a.txt"));
        touch(&temp_dir.path().join("b.txt"));

        let rows = scan_to_rows(temp_dir.path()).unwrap();
        assert_eq!(rows[0].name, "a.txt");
        assert_eq!(rows[1].name, "b.txt");
        assert_eq!(rows[2].name, "c.txt");
    }

    #[test]
    fn test_directories_are_not_yielded() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("sub")).unwrap();
        touch(&temp_dir.path().join("sub").join("only.txt"));

        let rows = scan_to_rows(temp_dir.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "only.txt");
        assert_eq!(rows[0].subdir, "sub");
    }
}
