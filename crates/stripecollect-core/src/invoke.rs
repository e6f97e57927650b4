//! 外部工具调用：同步启动子进程，完整捕获 stdout / stderr 后返回
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::error::{CollectError, Result};
use crate::options::ToolCommand;

/// 要求工具输出诊断 JSON 的模式开关
pub const DIAGNOSTIC_FLAG: &str = "-d";

/// 单次工具调用请求（调用返回后不保留任何状态）
#[derive(Debug, Clone, Copy)]
pub struct ToolInvocation<'a> {
    tool: &'a ToolCommand,
    path: &'a Path,
    stripe: &'a str,
    skip: &'a str,
}

/// 单次调用捕获到的输出
/// 退出码仅用于调试日志，不参与流程判断
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// 被信号终止时为 None
    pub exit_code: Option<i32>,
}

impl<'a> ToolInvocation<'a> {
    pub fn new(tool: &'a ToolCommand, path: &'a Path, stripe: &'a str, skip: &'a str) -> Self {
        Self { tool, path, stripe, skip }
    }

    /// 完整参数列表：前置参数 + `--path <file> --stripe <n> --skip <n> -d`
    pub fn args(&self) -> Vec<OsString> {
        let mut args = self.tool.leading_args.clone();
        args.push("--path".into());
        args.push(self.path.as_os_str().to_owned());
        args.push("--stripe".into());
        args.push(self.stripe.into());
        args.push("--skip".into());
        args.push(self.skip.into());
        args.push(DIAGNOSTIC_FLAG.into());
        args
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.tool.program);
        cmd.args(self.args());
        cmd
    }

    /// 阻塞执行直到子进程退出；只有无法启动时才返回错误
    pub fn run(&self) -> Result<ToolOutput> {
        let output = self.to_command().output().map_err(|source| CollectError::Spawn {
            program: self.tool.program.clone(),
            path: self.path.to_path_buf(),
            source,
        })?;
        Ok(ToolOutput { stdout: output.stdout, stderr: output.stderr, exit_code: output.status.code() })
    }
}

impl ToolOutput {
    pub fn stderr_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }
}
