use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stripecollect_core::{collect, CollectOptions};
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(
    name = "stripecollect",
    version,
    about = "递归遍历目录，逐个文件调用 ChaCha20 条带加密工具，并把诊断 JSON 汇总为 ndjson"
)]
struct Cli {
    /// 遍历起始目录
    #[arg(long, short = 'p')]
    path: PathBuf,

    /// 汇总结果文件（ndjson，追加写入）
    #[arg(long, short = 'o')]
    output: PathBuf,

    /// 加密条带大小（字节，原样透传给工具）
    #[arg(long, short = 's')]
    stripe: String,

    /// 跳过区段大小（字节，原样透传给工具）
    #[arg(long, short = 'k')]
    skip: String,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    let opts = CollectOptions::new(cli.stripe, cli.skip);
    let stats = collect(&cli.path, &cli.output, &opts)
        .with_context(|| format!("collection from {} failed", cli.path.display()))?;

    info!(
        files_processed = stats.files_processed,
        records_written = stats.records_written,
        empty_outputs = stats.empty_outputs,
        parse_failures = stats.parse_failures,
        append_failures = stats.append_failures,
        entries_skipped = stats.entries_skipped,
        "collection finished"
    );
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
