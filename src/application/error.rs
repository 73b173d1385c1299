//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::ParseError;
use crate::domain::ChapterError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 不支持的文件格式
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// 文件解析错误
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<ChapterError> for ApplicationError {
    fn from(err: ChapterError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<ParseError> for ApplicationError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnsupportedFormat(ext) => Self::UnsupportedFormat(ext),
            other => Self::ParseError(other.to_string()),
        }
    }
}
