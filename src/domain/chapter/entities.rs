//! Chapter Context - Entities

use serde::Serialize;

/// 文本长度，按 UTF-16 码元计算
///
/// 与前端 `String.length` 一致：BMP 内的汉字计 1，emoji 等补充平面字符计 2。
#[inline]
pub fn char_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// 章节 - 分章结果的最小单位
///
/// 不变量:
/// - char_count 始终等于 content 的 UTF-16 码元数（标题不计入）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    title: String,
    content: String,
    char_count: usize,
}

impl Chapter {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let char_count = char_len(&content);
        Self {
            title: title.into(),
            content,
            char_count,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// 以分隔符拼接另一段正文，并重新计算字数
    pub fn append_content(&mut self, separator: &str, content: &str) {
        self.content.push_str(separator);
        self.content.push_str(content);
        self.char_count = char_len(&self.content);
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_not_bytes() {
        let chapter = Chapter::new("第一章", "斗之力，三段！");
        assert_eq!(chapter.char_count(), 7);
        assert_eq!(chapter.content().len(), 21);
    }

    #[test]
    fn test_char_count_uses_utf16_units() {
        assert_eq!(Chapter::new("t", "😀").char_count(), 2);
        assert_eq!(Chapter::new("t", "笑😀了").char_count(), 4);

        let mut chapter = Chapter::new("t", "a");
        chapter.append_content("", "𠀀");
        assert_eq!(chapter.char_count(), 3);
    }

    #[test]
    fn test_append_content_recounts() {
        let mut chapter = Chapter::new("第一章", "前文");
        chapter.append_content("\n\n", "后文");
        assert_eq!(chapter.content(), "前文\n\n后文");
        assert_eq!(chapter.char_count(), 6);
    }

    #[test]
    fn test_serializes_camel_case() {
        let chapter = Chapter::new("序章", "abc");
        let json = serde_json::to_value(&chapter).unwrap();
        assert_eq!(json["title"], "序章");
        assert_eq!(json["content"], "abc");
        assert_eq!(json["charCount"], 3);
    }
}
