//! 核心扫描库
//!
//! 设计要点：
//! - 单文件、单模式：输入路径与正则均为固定值，不提供任何配置面。
//! - 读取与匹配分离：文件句柄在读取阶段作用域内获取并释放（含失败路径），
//!   匹配只针对内存中的完整字符串。
//! - 报告写入注入的 `&mut dyn Write`，stdout 文本可在测试中逐字节断言。

mod detector;
mod error;
mod findings;
mod report;
mod scan;

pub use error::InputError;
pub use findings::Finding;
pub use scan::{scan_and_report, ScanStats, INPUT_PATH};
