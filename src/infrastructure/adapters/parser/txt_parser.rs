//! TXT Manuscript Parser
//!
//! 纯文本稿件解析：去除 BOM、按 UTF-8 解码、剔除 NUL 字符

use crate::application::ports::{file_extension, ManuscriptParserPort, ParseError};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// TXT 稿件解析器
#[derive(Debug, Clone, Default)]
pub struct TxtManuscriptParser;

impl TxtManuscriptParser {
    pub fn new() -> Self {
        Self
    }
}

impl ManuscriptParserPort for TxtManuscriptParser {
    fn parse(&self, file_name: &str, bytes: &[u8]) -> Result<String, ParseError> {
        if !self.supports(file_name) {
            return Err(ParseError::UnsupportedFormat(
                file_extension(file_name).unwrap_or_default(),
            ));
        }

        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let mut text = std::str::from_utf8(bytes)
            .map_err(|_| ParseError::InvalidEncoding)?
            .to_string();

        // UTF-16 导出的文件按字节读会夹杂 NUL
        if text.contains('\0') {
            text.retain(|c| c != '\0');
        }

        if text.trim().is_empty() {
            return Err(ParseError::EmptyContent);
        }

        Ok(text)
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".txt"]
    }
}
