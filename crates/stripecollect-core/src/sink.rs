//! ndjson 追加写入
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{CollectError, Result};
use crate::types::OutputRecord;

/// 将一条记录以紧凑 JSON + `\n` 追加到 `output`
/// 每次调用独立打开（不存在则创建）并在返回时关闭文件，不截断已有内容。
/// 整行先序列化到内存再一次写出，避免半行记录。
pub fn append_record(output: &Path, record: &OutputRecord) -> Result<()> {
    let append_err = |source: io::Error| CollectError::Append { path: output.to_path_buf(), source };

    let mut line = serde_json::to_vec(record).map_err(|e| append_err(e.into()))?;
    line.push(b'\n');

    let mut file = OpenOptions::new().create(true).append(true).open(output).map_err(append_err)?;
    file.write_all(&line).map_err(append_err)?;
    Ok(())
}
