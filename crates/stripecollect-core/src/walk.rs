//! 目录遍历（深度优先，目录内按文件名排序）
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::error::{CollectError, Result};

/// 普通文件迭代器
/// - 根目录本身不产出；根目录不可读时产出一次 `CollectError::Walk`
/// - 子目录/条目读取失败只记录告警并计数，遍历继续
/// - 不跟随符号链接进入目录；指向普通文件的符号链接视为文件
pub struct FileWalk {
    root: PathBuf,
    inner: walkdir::IntoIter,
    skipped: usize,
}

/// 从 `root` 开始递归枚举所有普通文件
pub fn discover_files(root: &Path) -> FileWalk {
    let inner = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    FileWalk { root: root.to_path_buf(), inner, skipped: 0 }
}

impl FileWalk {
    /// 因读取失败被跳过的条目数
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for FileWalk {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(e) => e,
                // 深度 0 的错误来自根目录本身：交由调用方终止运行
                Err(err) if err.depth() == 0 => {
                    return Some(Err(CollectError::Walk { path: self.root.clone(), source: err }));
                }
                Err(err) => {
                    warn!(path = ?err.path(), error = %err, "skipping unreadable entry");
                    self.skipped += 1;
                    continue;
                }
            };
            if is_regular_file(&entry) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    if ft.is_file() { return true; }
    if ft.is_symlink() {
        // 悬空链接或指向目录的链接均跳过
        return fs::metadata(entry.path()).map(|md| md.is_file()).unwrap_or(false);
    }
    false
}
