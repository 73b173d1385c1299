//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod manuscript_parser;

pub use manuscript_parser::{file_extension, ManuscriptParserPort, ParseError};
