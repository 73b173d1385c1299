//! Domain Layer - 领域层
//!
//! 包含:
//! - Chapter Context: 章节实体与分章参数
//! - 章节分割器: 纯文本变换，不做任何 I/O

pub mod chapter;

mod chapter_splitter;

pub use chapter::{char_len, Chapter, ChapterError, SplitMode, SplitOptions};
pub use chapter_splitter::{
    find_break_point, normalize_chapter_sizes, split_by_char_count, split_by_chapter_markers,
    split_novel, MAX_CHAPTER_CHARS, MIN_TAIL_CHARS,
};
