//! 扫描主流程（读取 → 匹配 → 输出）
use anyhow::Result;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use crate::detector::Detector;
use crate::error::InputError;
use crate::report::write_report;

/// 固定输入路径（相对当前工作目录）
pub const INPUT_PATH: &str = "index.html";

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub documents_scanned: usize,
    pub matches_found: usize,
}

/// 扫描单个文档并将报告写入 `out`
/// 顺序保证：命中按起始偏移升序输出，即文档从左到右的出现顺序
pub fn scan_and_report(path: &Path, out: &mut dyn Write) -> Result<ScanStats> {
    let content = read_document(path)?;

    let detector = Detector::new();
    let findings = detector.find_all(&content);

    let stats = ScanStats { documents_scanned: 1, matches_found: findings.len() };
    write_report(out, &findings)?;

    Ok(stats)
}

/// 读取文档全文并解码为 UTF-8
/// 文件句柄在本函数返回前释放（含读取失败路径），匹配阶段不再持有任何文件资源
fn read_document(path: &Path) -> Result<String, InputError> {
    let file = File::open(path)
        .map_err(|source| InputError::Read { path: path.to_path_buf(), source })?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|source| InputError::Read { path: path.to_path_buf(), source })?;

    String::from_utf8(buf)
        .map_err(|source| InputError::Decode { path: path.to_path_buf(), source })
}
