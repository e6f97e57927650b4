//! 错误类型
//!
//! 分两级处理：
//! - `Walk` / `Spawn`：运行级错误，直接终止本次采集；
//! - `Parse` / `Append`：单文件错误，由采集循环记录日志后继续下一个文件。
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    /// 根目录不存在或不可读
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// 外部工具无法启动（路径错误、无执行权限等）
    #[error("failed to spawn {} for {}: {source}", .program.display(), .path.display())]
    Spawn {
        program: PathBuf,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 工具标准输出不是单个合法 JSON 文档
    #[error("malformed tool output for {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to append record to {}: {source}", .path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CollectError {
    /// 是否仅影响单个文件（采集可继续）
    pub fn is_per_file(&self) -> bool {
        matches!(self, CollectError::Parse { .. } | CollectError::Append { .. })
    }
}

pub type Result<T, E = CollectError> = std::result::Result<T, E>;
