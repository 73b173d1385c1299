//! Chapter Command Handlers

use std::sync::Arc;

use crate::application::commands::{SplitNovelFile, SplitNovelText};
use crate::application::error::ApplicationError;
use crate::application::ports::ManuscriptParserPort;
use crate::domain::{char_len, split_novel, Chapter, SplitMode, SplitOptions};

/// 分章请求的上限
#[derive(Debug, Clone, Copy)]
pub struct SplitLimits {
    /// 目标字数上限
    pub max_target_chars: usize,
    /// 单次分章的文本字数上限
    pub max_text_chars: usize,
}

impl Default for SplitLimits {
    fn default() -> Self {
        Self {
            max_target_chars: 100_000,
            max_text_chars: 20_000_000,
        }
    }
}

/// 分章响应
#[derive(Debug, Clone)]
pub struct SplitNovelResponse {
    pub chapters: Vec<Chapter>,
    pub total_chapters: usize,
    pub total_chars: usize,
    pub mode: SplitMode,
    pub target_chars: usize,
}

// ============================================================================
// SplitNovelText
// ============================================================================

/// SplitNovelText Handler
///
/// 分章是纯 CPU 计算，放到阻塞线程池执行，避免占用异步运行时
#[derive(Debug, Clone)]
pub struct SplitNovelTextHandler {
    limits: SplitLimits,
}

impl SplitNovelTextHandler {
    pub fn new(limits: SplitLimits) -> Self {
        Self { limits }
    }

    pub async fn handle(
        &self,
        command: SplitNovelText,
    ) -> Result<SplitNovelResponse, ApplicationError> {
        let options = SplitOptions::new(command.mode, command.target_chars)?;

        if options.target_chars() > self.limits.max_target_chars {
            return Err(ApplicationError::validation(format!(
                "targetChars must not exceed {}",
                self.limits.max_target_chars
            )));
        }

        let text_chars = char_len(&command.text);
        if text_chars > self.limits.max_text_chars {
            return Err(ApplicationError::validation(format!(
                "Text too long: {} chars, limit {}",
                text_chars, self.limits.max_text_chars
            )));
        }

        let text = command.text;
        let chapters = tokio::task::spawn_blocking(move || split_novel(&text, &options))
            .await
            .map_err(|e| ApplicationError::internal(format!("Split task failed: {}", e)))?;

        let total_chars = chapters.iter().map(Chapter::char_count).sum();

        tracing::info!(
            mode = %options.mode(),
            target_chars = options.target_chars(),
            text_chars = text_chars,
            total_chapters = chapters.len(),
            "Novel split into chapters"
        );

        Ok(SplitNovelResponse {
            total_chapters: chapters.len(),
            total_chars,
            chapters,
            mode: options.mode(),
            target_chars: options.target_chars(),
        })
    }
}

// ============================================================================
// SplitNovelFile
// ============================================================================

/// SplitNovelFile Handler - 先解析稿件，再按文本分章
pub struct SplitNovelFileHandler {
    parser: Arc<dyn ManuscriptParserPort>,
    text_handler: SplitNovelTextHandler,
}

impl SplitNovelFileHandler {
    pub fn new(parser: Arc<dyn ManuscriptParserPort>, limits: SplitLimits) -> Self {
        Self {
            parser,
            text_handler: SplitNovelTextHandler::new(limits),
        }
    }

    pub async fn handle(
        &self,
        command: SplitNovelFile,
    ) -> Result<SplitNovelResponse, ApplicationError> {
        let text = self.parser.parse(&command.file_name, &command.bytes)?;

        tracing::debug!(
            file_name = %command.file_name,
            bytes = command.bytes.len(),
            "Manuscript parsed"
        );

        self.text_handler
            .handle(SplitNovelText {
                text,
                mode: command.mode,
                target_chars: command.target_chars,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ParseError;

    struct FakeParser;

    impl ManuscriptParserPort for FakeParser {
        fn parse(&self, file_name: &str, bytes: &[u8]) -> Result<String, ParseError> {
            if !self.supports(file_name) {
                return Err(ParseError::UnsupportedFormat(file_name.to_string()));
            }
            String::from_utf8(bytes.to_vec()).map_err(|_| ParseError::InvalidEncoding)
        }

        fn supported_extensions(&self) -> &'static [&'static str] {
            &[".txt"]
        }
    }

    fn text_command(text: &str, mode: SplitMode, target_chars: usize) -> SplitNovelText {
        SplitNovelText {
            text: text.to_string(),
            mode,
            target_chars,
        }
    }

    #[tokio::test]
    async fn test_split_text() {
        let handler = SplitNovelTextHandler::new(SplitLimits::default());
        let text = format!("第一章 起\n{}\n第二章 承\n{}", "甲".repeat(2000), "乙".repeat(2000));

        let response = handler
            .handle(text_command(&text, SplitMode::Chapter, 3000))
            .await
            .unwrap();

        assert_eq!(response.total_chapters, 2);
        assert_eq!(response.total_chars, 4000);
        assert_eq!(response.chapters[0].title(), "第一章 起");
        assert_eq!(response.mode, SplitMode::Chapter);
        assert_eq!(response.target_chars, 3000);
    }

    #[tokio::test]
    async fn test_empty_text_is_not_an_error() {
        let handler = SplitNovelTextHandler::new(SplitLimits::default());
        let response = handler
            .handle(text_command("   ", SplitMode::CharCount, 3000))
            .await
            .unwrap();
        assert_eq!(response.total_chapters, 0);
        assert!(response.chapters.is_empty());
    }

    #[tokio::test]
    async fn test_zero_target_rejected() {
        let handler = SplitNovelTextHandler::new(SplitLimits::default());
        let err = handler
            .handle(text_command("文本", SplitMode::CharCount, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_limits_enforced() {
        let handler = SplitNovelTextHandler::new(SplitLimits {
            max_target_chars: 5000,
            max_text_chars: 10,
        });

        let err = handler
            .handle(text_command("文本", SplitMode::CharCount, 6000))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));

        let err = handler
            .handle(text_command(&"字".repeat(11), SplitMode::CharCount, 3000))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_split_file() {
        let handler = SplitNovelFileHandler::new(Arc::new(FakeParser), SplitLimits::default());
        let response = handler
            .handle(SplitNovelFile {
                file_name: "novel.txt".to_string(),
                bytes: "正文。".repeat(100).into_bytes(),
                mode: SplitMode::CharCount,
                target_chars: 3000,
            })
            .await
            .unwrap();

        assert_eq!(response.total_chapters, 1);
        assert_eq!(response.chapters[0].title(), "第1章");
        assert_eq!(response.total_chars, 300);
    }

    #[tokio::test]
    async fn test_split_file_unsupported_format() {
        let handler = SplitNovelFileHandler::new(Arc::new(FakeParser), SplitLimits::default());
        let err = handler
            .handle(SplitNovelFile {
                file_name: "novel.epub".to_string(),
                bytes: Vec::new(),
                mode: SplitMode::Chapter,
                target_chars: 3000,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::UnsupportedFormat(_)));
    }
}
