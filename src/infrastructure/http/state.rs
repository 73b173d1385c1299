//! Application State
//!
//! 分章 Handlers 及请求默认值

use std::sync::Arc;

use crate::application::{
    ManuscriptParserPort, SplitLimits, SplitNovelFileHandler, SplitNovelTextHandler,
};
use crate::domain::SplitMode;

/// 请求未指定时使用的分章参数
#[derive(Debug, Clone, Copy)]
pub struct SplitDefaults {
    pub mode: SplitMode,
    pub target_chars: usize,
}

impl Default for SplitDefaults {
    fn default() -> Self {
        Self {
            mode: SplitMode::Chapter,
            target_chars: 3000,
        }
    }
}

/// 应用状态
pub struct AppState {
    pub defaults: SplitDefaults,

    // ========== Command Handlers ==========
    pub split_text_handler: SplitNovelTextHandler,
    pub split_file_handler: SplitNovelFileHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        parser: Arc<dyn ManuscriptParserPort>,
        limits: SplitLimits,
        defaults: SplitDefaults,
    ) -> Self {
        Self {
            defaults,
            split_text_handler: SplitNovelTextHandler::new(limits),
            split_file_handler: SplitNovelFileHandler::new(parser, limits),
        }
    }
}
