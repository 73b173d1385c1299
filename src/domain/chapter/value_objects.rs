//! Chapter Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::ChapterError;

/// 分章模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMode {
    /// 按章节标记（"第X章"、"Chapter N"）分章
    #[default]
    #[serde(rename = "chapter")]
    Chapter,
    /// 按目标字数分章
    #[serde(rename = "charCount")]
    CharCount,
}

impl SplitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMode::Chapter => "chapter",
            SplitMode::CharCount => "charCount",
        }
    }
}

impl FromStr for SplitMode {
    type Err = ChapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chapter" => Ok(SplitMode::Chapter),
            "charCount" => Ok(SplitMode::CharCount),
            other => Err(ChapterError::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for SplitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 分章参数
///
/// 不变量: target_chars > 0。反序列化同样经过 [`SplitOptions::new`] 校验。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSplitOptions")]
pub struct SplitOptions {
    mode: SplitMode,
    target_chars: usize,
}

impl SplitOptions {
    pub fn new(mode: SplitMode, target_chars: usize) -> Result<Self, ChapterError> {
        if target_chars == 0 {
            return Err(ChapterError::InvalidTargetChars);
        }
        Ok(Self { mode, target_chars })
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    pub fn target_chars(&self) -> usize {
        self.target_chars
    }
}

/// 未经校验的分章参数，仅用于反序列化
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSplitOptions {
    mode: SplitMode,
    target_chars: usize,
}

impl TryFrom<RawSplitOptions> for SplitOptions {
    type Error = ChapterError;

    fn try_from(raw: RawSplitOptions) -> Result<Self, Self::Error> {
        SplitOptions::new(raw.mode, raw.target_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("chapter".parse::<SplitMode>(), Ok(SplitMode::Chapter));
        assert_eq!("charCount".parse::<SplitMode>(), Ok(SplitMode::CharCount));
        assert_eq!(
            "charcount".parse::<SplitMode>(),
            Err(ChapterError::InvalidMode("charcount".to_string()))
        );
    }

    #[test]
    fn test_mode_serde_literals() {
        assert_eq!(serde_json::to_string(&SplitMode::CharCount).unwrap(), "\"charCount\"");
        let mode: SplitMode = serde_json::from_str("\"chapter\"").unwrap();
        assert_eq!(mode, SplitMode::Chapter);
    }

    #[test]
    fn test_options_reject_zero_target() {
        assert_eq!(
            SplitOptions::new(SplitMode::Chapter, 0),
            Err(ChapterError::InvalidTargetChars)
        );
        let options = SplitOptions::new(SplitMode::CharCount, 3000).unwrap();
        assert_eq!(options.target_chars(), 3000);
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: SplitOptions =
            serde_json::from_str(r#"{"mode":"charCount","targetChars":2000}"#).unwrap();
        assert_eq!(options.mode(), SplitMode::CharCount);
        assert_eq!(options.target_chars(), 2000);
    }

    #[test]
    fn test_options_deserialize_rejects_zero_target() {
        let result =
            serde_json::from_str::<SplitOptions>(r#"{"mode":"charCount","targetChars":0}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("目标字数必须大于 0"));
    }

    #[test]
    fn test_default_mode_is_chapter() {
        assert_eq!(SplitMode::default(), SplitMode::Chapter);
    }
}
