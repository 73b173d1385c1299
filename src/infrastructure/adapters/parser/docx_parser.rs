//! DOCX Manuscript Parser
//!
//! 从 word/document.xml 中提取正文：每个段落（w:p）一行，
//! w:tab 转为制表符，w:br 转为换行

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::application::ports::{file_extension, ManuscriptParserPort, ParseError};

const DOCUMENT_XML: &str = "word/document.xml";

/// DOCX 稿件解析器
#[derive(Debug, Clone, Default)]
pub struct DocxManuscriptParser;

impl DocxManuscriptParser {
    pub fn new() -> Self {
        Self
    }

    fn read_document_xml(bytes: &[u8]) -> Result<String, ParseError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ParseError::ReadFailed(format!("not a DOCX archive: {e}")))?;

        let mut document_xml = archive
            .by_name(DOCUMENT_XML)
            .map_err(|e| ParseError::ReadFailed(format!("missing {DOCUMENT_XML}: {e}")))?;

        let mut content = String::new();
        document_xml
            .read_to_string(&mut content)
            .map_err(|e| ParseError::ReadFailed(format!("failed to read {DOCUMENT_XML}: {e}")))?;
        Ok(content)
    }

    fn extract_text(xml: &str) -> Result<String, ParseError> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(false);

        let mut buf = Vec::new();
        let mut text = String::new();
        let mut in_text = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:p" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"w:tab" => text.push('\t'),
                    b"w:br" | b"w:cr" => text.push('\n'),
                    b"w:p" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(e)) if in_text => {
                    let unescaped = e.unescape().map_err(|e| {
                        ParseError::ReadFailed(format!("invalid text in {DOCUMENT_XML}: {e}"))
                    })?;
                    text.push_str(&unescaped);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ParseError::ReadFailed(format!(
                        "malformed {DOCUMENT_XML} at {}: {e}",
                        reader.buffer_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(text)
    }
}

impl ManuscriptParserPort for DocxManuscriptParser {
    fn parse(&self, file_name: &str, bytes: &[u8]) -> Result<String, ParseError> {
        if !self.supports(file_name) {
            return Err(ParseError::UnsupportedFormat(
                file_extension(file_name).unwrap_or_default(),
            ));
        }

        let xml = Self::read_document_xml(bytes)?;
        let text = Self::extract_text(&xml)?;

        if text.trim().is_empty() {
            tracing::warn!(file_name = %file_name, "DOCX manuscript has no content");
            return Err(ParseError::EmptyContent);
        }

        Ok(text)
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".docx"]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// 生成只含 document.xml 的最小 DOCX
    pub(crate) fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>", p))
            .collect();
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{}</w:body></w:document>",
            body
        );

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file(DOCUMENT_XML, SimpleFileOptions::default())
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_parse_paragraphs() {
        let parser = DocxManuscriptParser::new();
        let bytes = docx_bytes(&["第一章 陨落的天才", "斗之力，三段！", "第二章 斗气大陆"]);

        let text = parser.parse("斗破苍穹.docx", &bytes).unwrap();
        assert_eq!(text, "第一章 陨落的天才\n斗之力，三段！\n第二章 斗气大陆\n");
    }

    #[test]
    fn test_runs_tabs_and_breaks() {
        let xml = "<w:document><w:body>\
                   <w:p><w:r><w:t>萧</w:t></w:r><w:r><w:tab/><w:t>炎</w:t><w:br/></w:r></w:p>\
                   <w:p><w:r><w:t>A &amp; B</w:t></w:r></w:p>\
                   <w:p/>\
                   </w:body></w:document>";
        let text = DocxManuscriptParser::extract_text(xml).unwrap();
        assert_eq!(text, "萧\t炎\n\nA & B\n\n");
    }

    #[test]
    fn test_text_outside_runs_ignored() {
        let xml = "<w:document><w:body><w:p><w:instrText>PAGE</w:instrText>\
                   <w:r><w:t>正文</w:t></w:r></w:p></w:body></w:document>";
        assert_eq!(DocxManuscriptParser::extract_text(xml).unwrap(), "正文\n");
    }

    #[test]
    fn test_empty_document() {
        let parser = DocxManuscriptParser::new();
        let bytes = docx_bytes(&["", "  "]);
        assert_eq!(parser.parse("a.docx", &bytes), Err(ParseError::EmptyContent));
    }

    #[test]
    fn test_not_a_zip_archive() {
        let parser = DocxManuscriptParser::new();
        assert!(matches!(
            parser.parse("a.docx", b"plain text, not a zip"),
            Err(ParseError::ReadFailed(_))
        ));
    }

    #[test]
    fn test_missing_document_xml() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"<w:styles/>").unwrap();
        let bytes = zip.finish().unwrap().into_inner();

        let err = DocxManuscriptParser::new().parse("a.docx", &bytes).unwrap_err();
        assert!(matches!(err, ParseError::ReadFailed(msg) if msg.contains(DOCUMENT_XML)));
    }

    #[test]
    fn test_other_extensions_rejected() {
        let parser = DocxManuscriptParser::new();
        assert_eq!(
            parser.parse("a.txt", b"abc"),
            Err(ParseError::UnsupportedFormat(".txt".to_string()))
        );
    }
}
