//! 集成测试公共工具：用 sh 脚本模拟外部加密工具
#![allow(dead_code)]

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use stripecollect_core::ToolCommand;

/// 模拟工具
/// - 每次调用把完整参数（`$*`）追加到 `calls` 文件
/// - `cases` 是 sh `case "$2" in ... esac` 的分支体，$2 为 --path 的值
pub struct FakeTool {
    pub command: ToolCommand,
    pub calls: PathBuf,
}

impl FakeTool {
    pub fn new(dir: &Path, cases: &str) -> Self {
        let calls = dir.join("calls.log");
        let script = dir.join("fake-tool.sh");
        let body = format!(
            "printf '%s\\n' \"$*\" >> '{}'\ncase \"$2\" in\n{}\n*) ;;\nesac\n",
            calls.display(),
            cases
        );
        fs::write(&script, body).expect("write fake tool");
        // 通过 sh 解释执行，脚本本身无需可执行权限
        let command = ToolCommand::new("sh").with_leading_args([script.into_os_string()]);
        Self { command, calls }
    }

    /// 每次调用的参数行（无调用时为空）
    pub fn calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.calls) {
            Ok(text) => text.lines().map(str::to_owned).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// 每次调用提交的目标路径
    pub fn submitted_paths(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|line| line.split(' ').nth(1).map(str::to_owned))
            .collect()
    }
}

/// 收集 tracing 输出，便于断言日志内容
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// 在捕获日志的 subscriber 下执行 `f`
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
