//! 固定文本报告
use std::io::Write;

use crate::findings::Finding;

/// 将命中结果写入 `out`：
/// - 有命中：先写一行计数，再按命中顺序逐行原样输出每个片段
/// - 无命中：写固定提示一行
pub(crate) fn write_report(out: &mut dyn Write, findings: &[Finding]) -> std::io::Result<()> {
    if findings.is_empty() {
        writeln!(out, "No broken patterns found.")?;
        return Ok(());
    }

    writeln!(out, "Found {} broken patterns:", findings.len())?;
    for f in findings {
        writeln!(out, "{}", f.value)?;
    }
    Ok(())
}
