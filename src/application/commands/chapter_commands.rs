//! Chapter Commands

use crate::domain::SplitMode;

/// 对文本分章命令
#[derive(Debug, Clone)]
pub struct SplitNovelText {
    pub text: String,
    pub mode: SplitMode,
    pub target_chars: usize,
}

/// 对上传的稿件文件分章命令
#[derive(Debug, Clone)]
pub struct SplitNovelFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mode: SplitMode,
    pub target_chars: usize,
}
