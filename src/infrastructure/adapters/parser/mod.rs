//! Manuscript Parser Adapter - 稿件解析实现

mod dispatch_parser;
mod docx_parser;
mod pdf_parser;
mod txt_parser;

pub use dispatch_parser::DispatchingManuscriptParser;
pub use docx_parser::DocxManuscriptParser;
pub use pdf_parser::PdfManuscriptParser;
pub use txt_parser::TxtManuscriptParser;

#[cfg(test)]
pub(crate) use docx_parser::tests::docx_bytes;
