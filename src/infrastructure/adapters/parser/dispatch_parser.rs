//! Dispatching Manuscript Parser
//!
//! 按文件扩展名把稿件交给对应格式的解析器

use crate::application::ports::{file_extension, ManuscriptParserPort, ParseError};

use super::{DocxManuscriptParser, PdfManuscriptParser, TxtManuscriptParser};

/// 多格式稿件解析器（.txt / .docx / .pdf）
pub struct DispatchingManuscriptParser {
    parsers: Vec<Box<dyn ManuscriptParserPort>>,
}

impl DispatchingManuscriptParser {
    pub fn new() -> Self {
        Self {
            parsers: vec![
                Box::new(TxtManuscriptParser::new()),
                Box::new(DocxManuscriptParser::new()),
                Box::new(PdfManuscriptParser::new()),
            ],
        }
    }
}

impl Default for DispatchingManuscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManuscriptParserPort for DispatchingManuscriptParser {
    fn parse(&self, file_name: &str, bytes: &[u8]) -> Result<String, ParseError> {
        let parser = self
            .parsers
            .iter()
            .find(|parser| parser.supports(file_name))
            .ok_or_else(|| {
                ParseError::UnsupportedFormat(file_extension(file_name).unwrap_or_default())
            })?;

        parser.parse(file_name, bytes)
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".txt", ".docx", ".pdf"]
    }
}
