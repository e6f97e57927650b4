//! 工具输出解析：stdout → 通用 JSON 值（不约束结构）
use std::path::Path;

use crate::error::{CollectError, Result};
use crate::types::OutputRecord;

/// 解析单个文件的工具输出
/// - stdout 长度为 0：返回 `Ok(None)`（无结果，不是错误）
/// - 否则必须恰好是一个 JSON 文档（允许首尾空白）
pub fn parse_stdout(path: &Path, stdout: &[u8]) -> Result<Option<OutputRecord>> {
    if stdout.is_empty() { return Ok(None); }
    serde_json::from_slice(stdout)
        .map(Some)
        .map_err(|source| CollectError::Parse { path: path.to_path_buf(), source })
}
