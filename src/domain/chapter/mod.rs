//! Chapter Context - 章节限界上下文
//!
//! 职责:
//! - 章节实体（标题、正文、字数）
//! - 分章模式与分章参数

mod entities;
mod errors;
mod value_objects;

pub use entities::{char_len, Chapter};
pub use errors::ChapterError;
pub use value_objects::{SplitMode, SplitOptions};
