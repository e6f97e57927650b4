//! 特征采集核心库
//!
//! 流程：
//! - 从根目录深度优先枚举普通文件（目录内按文件名排序，结果可复现）；
//! - 对每个文件同步调用外部加密工具 `--path <file> --stripe <n> --skip <n> -d`，完整捕获输出；
//! - stdout 非空时解析为单个 JSON 文档，成功则以一行紧凑 JSON 追加到输出文件（ndjson）；
//! - 单文件解析/写入失败只记录日志，不影响后续文件；严格串行，无重试。

mod collect;
mod error;
mod invoke;
mod options;
mod record;
mod sink;
mod types;
mod walk;

pub use collect::{collect, process_file, FileOutcome};
pub use error::{CollectError, Result};
pub use invoke::{ToolInvocation, ToolOutput, DIAGNOSTIC_FLAG};
pub use options::{CollectOptions, RunStats, ToolCommand, DEFAULT_TOOL_PATH};
pub use record::parse_stdout;
pub use sink::append_record;
pub use types::OutputRecord;
pub use walk::{discover_files, FileWalk};
