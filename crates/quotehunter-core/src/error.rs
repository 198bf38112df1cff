//! 输入不可用错误（唯一错误类别）
use std::path::PathBuf;
use thiserror::Error;

/// 输入文件缺失、不可读或不是合法 UTF-8。
/// 策略：不重试、不回退编码，直接向调用方传播并中止本次运行。
#[derive(Debug, Error)]
pub enum InputError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode {} as utf-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
