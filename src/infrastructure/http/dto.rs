//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::SplitNovelResponse;
use crate::domain::Chapter;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Chapter DTOs
// ============================================================================

/// 文本分章请求，mode / targetChars 缺省时使用配置中的默认值
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitTextRequest {
    pub text: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub target_chars: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterResponse {
    pub index: usize,
    pub title: String,
    pub content: String,
    pub char_count: usize,
}

impl ChapterResponse {
    fn from_chapter(index: usize, chapter: Chapter) -> Self {
        let char_count = chapter.char_count();
        let (title, content) = chapter.into_parts();
        Self {
            index,
            title,
            content,
            char_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub mode: String,
    pub target_chars: usize,
    pub total_chapters: usize,
    pub total_chars: usize,
    pub chapters: Vec<ChapterResponse>,
}

impl SplitResponse {
    pub fn new(result: SplitNovelResponse, file_name: Option<String>) -> Self {
        Self {
            file_name,
            mode: result.mode.as_str().to_string(),
            target_chars: result.target_chars,
            total_chapters: result.total_chapters,
            total_chars: result.total_chars,
            chapters: result
                .chapters
                .into_iter()
                .enumerate()
                .map(|(index, chapter)| ChapterResponse::from_chapter(index, chapter))
                .collect(),
        }
    }
}
