use anyhow::{Context, Result};
use quotehunter_core::{scan_and_report, INPUT_PATH};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// 命令行入口（无参数：输入路径与匹配模式均为固定值）
fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();

    info!(path = INPUT_PATH, "starting scan");

    // 报告以缓冲方式写入 stdout；日志全部走 stderr，两路输出互不混杂
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = scan_and_report(Path::new(INPUT_PATH), &mut out).context("scan input document")?;
    out.flush().ok();

    info!(
        documents_scanned = stats.documents_scanned,
        matches_found = stats.matches_found,
        "scan finished"
    );

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
