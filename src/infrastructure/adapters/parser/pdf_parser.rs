//! PDF Manuscript Parser
//!
//! 逐页提取文本，每行去除首尾空白；无法解析的页面跳过

use lopdf::Document;

use crate::application::ports::{file_extension, ManuscriptParserPort, ParseError};

/// PDF 稿件解析器
#[derive(Debug, Clone, Default)]
pub struct PdfManuscriptParser;

impl PdfManuscriptParser {
    pub fn new() -> Self {
        Self
    }

    fn extract_text(document: &Document) -> String {
        let mut text = String::new();

        for page_number in document.get_pages().into_keys() {
            let page_text = match document.extract_text(&[page_number]) {
                Ok(page_text) => page_text,
                Err(e) => {
                    tracing::warn!(page = page_number, error = %e, "Skipping unreadable PDF page");
                    continue;
                }
            };

            for line in page_text.lines() {
                text.push_str(line.trim());
                text.push('\n');
            }
        }

        text
    }
}

impl ManuscriptParserPort for PdfManuscriptParser {
    fn parse(&self, file_name: &str, bytes: &[u8]) -> Result<String, ParseError> {
        if !self.supports(file_name) {
            return Err(ParseError::UnsupportedFormat(
                file_extension(file_name).unwrap_or_default(),
            ));
        }

        let document = Document::load_mem(bytes)
            .map_err(|e| ParseError::ReadFailed(format!("not a readable PDF: {e}")))?;

        let text = Self::extract_text(&document);
        if text.trim().is_empty() {
            tracing::warn!(file_name = %file_name, "PDF manuscript has no text content");
            return Err(ParseError::EmptyContent);
        }

        Ok(text)
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".pdf"]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// 生成单页 PDF，每个字符串占一行
    pub(crate) fn pdf_bytes(lines: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new(
                "Td",
                vec![72.into(), (720 - 20 * i as i64).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_parse_text_lines() {
        let parser = PdfManuscriptParser::new();
        let bytes = pdf_bytes(&["Chapter 1 Dawn", "Chapter 2 Dusk"]);

        let text = parser.parse("novel.pdf", &bytes).unwrap();
        assert!(text.contains("Chapter 1 Dawn"));
        assert!(text.contains("Chapter 2 Dusk"));
        assert!(text.lines().all(|line| line == line.trim()));
    }

    #[test]
    fn test_page_without_text() {
        let parser = PdfManuscriptParser::new();
        assert_eq!(
            parser.parse("blank.pdf", &pdf_bytes(&[])),
            Err(ParseError::EmptyContent)
        );
    }

    #[test]
    fn test_corrupt_pdf() {
        let parser = PdfManuscriptParser::new();
        assert!(matches!(
            parser.parse("broken.PDF", b"%PDF-1.4 truncated"),
            Err(ParseError::ReadFailed(_))
        ));
    }

    #[test]
    fn test_other_extensions_rejected() {
        let parser = PdfManuscriptParser::new();
        assert_eq!(
            parser.parse("a.docx", b"PK"),
            Err(ParseError::UnsupportedFormat(".docx".to_string()))
        );
    }
}
