//! Chapter Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChapterError {
    #[error("无效的分章模式: {0}")]
    InvalidMode(String),

    #[error("目标字数必须大于 0")]
    InvalidTargetChars,
}
