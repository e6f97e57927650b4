//! 采集选项与统计信息（模块）
use std::ffi::OsString;
use std::path::PathBuf;

use crate::collect::FileOutcome;

/// 外部加密工具的默认路径（相对当前工作目录）
pub const DEFAULT_TOOL_PATH: &str = "./target/release/ITO5163";

/// 外部工具命令
/// - `program`：可执行文件路径
/// - `leading_args`：放在每文件参数之前的固定参数（例如经由解释器或包装脚本运行工具时）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: PathBuf,
    pub leading_args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), leading_args: Vec::new() }
    }

    /// 追加固定前置参数
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Default for ToolCommand {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL_PATH)
    }
}

/// 采集选项
/// stripe / skip 为不透明参数：原样透传给外部工具，不做解析与范围校验
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// 加密条带大小（字节）
    pub stripe: String,
    /// 跳过区段大小（字节）
    pub skip: String,
    /// 外部工具命令；默认 `./target/release/ITO5163`
    pub tool: ToolCommand,
}

impl CollectOptions {
    pub fn new(stripe: impl Into<String>, skip: impl Into<String>) -> Self {
        Self { stripe: stripe.into(), skip: skip.into(), tool: ToolCommand::default() }
    }

    pub fn with_tool(mut self, tool: ToolCommand) -> Self {
        self.tool = tool;
        self
    }
}

/// 单次运行的统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// 已提交给外部工具的文件数
    pub files_processed: usize,
    pub records_written: usize,
    /// 工具标准输出为空的文件数（不视为错误）
    pub empty_outputs: usize,
    pub parse_failures: usize,
    pub append_failures: usize,
    /// 遍历中因读取失败而跳过的条目数（根目录除外）
    pub entries_skipped: usize,
}

impl RunStats {
    /// 按单文件终态累计
    pub(crate) fn record(&mut self, outcome: FileOutcome) {
        self.files_processed += 1;
        match outcome {
            FileOutcome::Persisted => self.records_written += 1,
            FileOutcome::EmptyOutput => self.empty_outputs += 1,
            FileOutcome::ParseFailed => self.parse_failures += 1,
            FileOutcome::AppendFailed => self.append_failures += 1,
        }
    }
}
