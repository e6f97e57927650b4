//! 采集主流程：遍历 → 调用工具 → 解析 → 追加写入（严格串行）
use std::path::Path;

use tracing::{debug, error, info};

use crate::error::Result;
use crate::invoke::ToolInvocation;
use crate::options::{CollectOptions, RunStats};
use crate::record::parse_stdout;
use crate::sink::append_record;
use crate::walk::discover_files;

/// 单个文件的终态；任一终态都不影响后续文件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// 解析成功并已追加到输出文件
    Persisted,
    /// 工具无标准输出，跳过
    EmptyOutput,
    /// 输出不是合法 JSON，已记录日志
    ParseFailed,
    /// 追加写入失败，已记录日志
    AppendFailed,
}

/// 遍历 `root` 下所有普通文件，逐个调用外部工具并把 JSON 结果追加到 `output`
///
/// 只有运行级错误（根目录不可读、工具无法启动）会返回 `Err`；
/// 单文件的解析/写入失败仅记录日志并计入统计。
/// 没有任何记录时不会创建输出文件。
pub fn collect(root: &Path, output: &Path, opts: &CollectOptions) -> Result<RunStats> {
    info!(root = %root.display(), output = %output.display(), stripe = %opts.stripe, skip = %opts.skip, "starting collection");

    let mut stats = RunStats::default();
    let mut files = discover_files(root);
    for file in files.by_ref() {
        let file = file?;
        let outcome = process_file(&file, output, opts)?;
        stats.record(outcome);
    }
    stats.entries_skipped = files.skipped();
    Ok(stats)
}

/// 处理单个文件：Discovered → Invoked → 终态
pub fn process_file(file: &Path, output: &Path, opts: &CollectOptions) -> Result<FileOutcome> {
    info!(path = %file.display(), "processing target");

    let result = ToolInvocation::new(&opts.tool, file, &opts.stripe, &opts.skip).run()?;
    // 退出码与 stderr 不参与判断，仅供排查
    debug!(
        path = %file.display(),
        exit_code = ?result.exit_code,
        stdout_len = result.stdout.len(),
        stderr = %result.stderr_lossy().trim_end(),
        "tool returned"
    );

    let record = match parse_stdout(file, &result.stdout) {
        Ok(Some(v)) => v,
        Ok(None) => {
            debug!(path = %file.display(), "empty tool output, nothing to record");
            return Ok(FileOutcome::EmptyOutput);
        }
        Err(err) => {
            error!(path = %file.display(), error = %err, "exception while parsing tool output");
            return Ok(FileOutcome::ParseFailed);
        }
    };

    match append_record(output, &record) {
        Ok(()) => Ok(FileOutcome::Persisted),
        Err(err) => {
            error!(path = %file.display(), error = %err, "exception while writing record");
            Ok(FileOutcome::AppendFailed)
        }
    }
}
