//! Manuscript Parser Port - 稿件解析抽象
//!
//! 将上传的文件内容转为纯文本，具体实现在 infrastructure/adapters 层

use std::path::Path;
use thiserror::Error;

/// 稿件解析错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("File is not valid UTF-8 text")]
    InvalidEncoding,

    /// 文件损坏或结构不符合格式要求
    #[error("Failed to read manuscript: {0}")]
    ReadFailed(String),

    #[error("File has no text content")]
    EmptyContent,
}

/// 取文件扩展名（小写，含点号），如 ".txt"
pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

/// Manuscript Parser Port
///
/// 稿件解析器接口
pub trait ManuscriptParserPort: Send + Sync {
    /// 将文件内容解析为文本
    fn parse(&self, file_name: &str, bytes: &[u8]) -> Result<String, ParseError>;

    /// 支持的扩展名（小写，含点号）
    fn supported_extensions(&self) -> &'static [&'static str];

    fn supports(&self, file_name: &str) -> bool {
        file_extension(file_name)
            .map(|ext| self.supported_extensions().contains(&ext.as_str()))
            .unwrap_or(false)
    }
}
