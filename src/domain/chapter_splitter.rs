//! 章节分割器
//!
//! 将整本小说文本切分为有序的章节列表，分三步：
//! 1. 按章节标记（"第X章"、"Chapter N"）或按目标字数切分
//! 2. 过长章节（超过 5000 字）按目标字数再拆
//! 3. 末尾过短章节（不超过 1500 字）并入前一章
//!
//! 所有字数与偏移均按 UTF-16 码元计算（与前端 `String.length` 一致），
//! 切分点落在代理对中间时顺延到下一个字符边界。

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::chapter::{char_len, Chapter, SplitMode, SplitOptions};

/// 章节标记：行首（允许空格/制表符缩进）的"第X章/回/节/集/卷/部篇"或"Chapter N"
///
/// 行首指文本开头或 `\n`、`\r`、U+2028、U+2029 之后。
/// 匹配可能以 U+2028/U+2029 开头，它们属于空白，切块时会被去掉。
static CHAPTER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?Rm)(?:^|[\x{2028}\x{2029}])[ \t]*(第[零一二三四五六七八九十百千万壹贰叁肆伍陆柒捌玖拾佰仟0-9]+[章回节集卷部篇]|Chapter\s+[0-9]+|CHAPTER\s+[0-9]+)",
    )
    .expect("valid chapter marker regex")
});

/// 至少需要的章节标记数量，少于此数量时退化为按字数切分
const MIN_MARKERS: usize = 2;

/// 标题行最大字符数，超过则视为正文
const MAX_TITLE_CHARS: usize = 50;

/// 第一个标记前的文字超过此字数才保留为序章
const MIN_PREFACE_CHARS: usize = 50;

const PREFACE_TITLE: &str = "序章";

/// 剩余文字不超过 target * 1.67 时整体作为最后一章
const FINAL_CHAPTER_RATIO: f64 = 1.67;

/// 断点搜索窗口：[target * 0.8, target * 1.2)
const BREAK_WINDOW_START: f64 = 0.8;
const BREAK_WINDOW_END: f64 = 1.2;

/// 章节字数硬上限，超过则再拆
pub const MAX_CHAPTER_CHARS: usize = 5000;

/// 末尾章节字数不超过此值时并入前一章
pub const MIN_TAIL_CHARS: usize = 1500;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// 句末标点
#[inline]
fn is_sentence_end(ch: char) -> bool {
    matches!(ch, '。' | '！' | '？' | '.' | '!' | '?')
}

/// 去除首尾空白（含 BOM）
#[inline]
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// 行结束符
#[inline]
fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// UTF-16 偏移转字节偏移
///
/// 偏移落在代理对中间时顺延到下一个字符边界，超出长度时返回文本末尾。
fn byte_offset(text: &str, unit_index: usize) -> usize {
    let mut units = 0;
    for (index, ch) in text.char_indices() {
        if units >= unit_index {
            return index;
        }
        units += ch.len_utf16();
    }
    text.len()
}

fn numbered_title(index: usize) -> String {
    format!("第{}章", index)
}

/// 对整本小说分章
///
/// 按 `options.mode()` 选择切分方式，随后总是按 `options.target_chars()` 规整章节大小。
/// 空文本或只含空白的文本返回空列表。
pub fn split_novel(text: &str, options: &SplitOptions) -> Vec<Chapter> {
    let target = options.target_chars();
    let chapters = match options.mode() {
        SplitMode::Chapter => split_by_chapter_markers(text, target),
        SplitMode::CharCount => split_by_char_count(text, target),
    };

    normalize_chapter_sizes(chapters, target)
}

/// 按章节标记切分
///
/// 少于两个标记时视为无标记文本，改为按字数切分。
pub fn split_by_chapter_markers(text: &str, target_chars: usize) -> Vec<Chapter> {
    // (整个匹配的起始位置, 纯标记文本如"第一章")
    let markers: Vec<(usize, &str)> = CHAPTER_MARKER
        .captures_iter(text)
        .filter_map(|caps| Some((caps.get(0)?.start(), caps.get(1)?.as_str())))
        .collect();

    if markers.len() < MIN_MARKERS {
        debug!(
            markers = markers.len(),
            "Not enough chapter markers, falling back to char count split"
        );
        return split_by_char_count(text, target_chars);
    }

    let mut chapters = Vec::with_capacity(markers.len() + 1);

    let preface = trim_text(&text[..markers[0].0]);
    if char_len(preface) > MIN_PREFACE_CHARS {
        chapters.push(Chapter::new(PREFACE_TITLE, preface));
    }

    for (i, &(start, marker)) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map_or(text.len(), |&(next, _)| next);
        let chunk = trim_text(&text[start..end]);
        chapters.push(chapter_from_chunk(chunk, marker));
    }

    chapters
}

/// 从以标记开头的文本块中拆出标题和正文
fn chapter_from_chunk(chunk: &str, marker: &str) -> Chapter {
    let after_marker = || trim_text(chunk.strip_prefix(marker).unwrap_or(chunk));

    match chunk.find(is_line_break) {
        Some(newline) => {
            let first_line = trim_text(&chunk[..newline]);
            if char_len(first_line) <= MAX_TITLE_CHARS {
                // 首行较短，是正常的标题行（如"第一章 重生"）
                Chapter::new(first_line, trim_text(&chunk[newline..]))
            } else {
                // 首行太长，标记后直接跟正文
                Chapter::new(marker, after_marker())
            }
        }
        None if char_len(chunk) <= MAX_TITLE_CHARS => Chapter::new(chunk, ""),
        None => Chapter::new(marker, after_marker()),
    }
}

/// 按目标字数切分
///
/// 章节依次命名为"第1章"、"第2章"……
pub fn split_by_char_count(text: &str, target: usize) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut remaining = trim_text(text);
    let mut remaining_chars = char_len(remaining);
    let final_limit = target as f64 * FINAL_CHAPTER_RATIO;
    let mut index = 1;

    while !remaining.is_empty() {
        if remaining_chars as f64 <= final_limit {
            chapters.push(Chapter::new(numbered_title(index), remaining));
            break;
        }

        let cut = byte_offset(remaining, find_break_point(remaining, target));
        chapters.push(Chapter::new(
            numbered_title(index),
            trim_text(&remaining[..cut]),
        ));

        // remaining 已去除尾部空白，next 必为其后缀
        let next = trim_text(&remaining[cut..]);
        remaining_chars -= char_len(&remaining[..remaining.len() - next.len()]);
        remaining = next;
        index += 1;
    }

    chapters
}

/// 在 target 附近寻找断点，返回 UTF-16 偏移
///
/// 只在 `[floor(target * 0.8), min(floor(target * 1.2), 文本长度))` 窗口内搜索，
/// 优先级：段落（`\n\n` 之后）> 换行（`\n` 之后）> 句末标点（标点之后）。
/// 窗口内找不到任何边界时直接在 target 处切。
pub fn find_break_point(text: &str, target: usize) -> usize {
    let search_start = (target as f64 * BREAK_WINDOW_START).floor() as usize;
    let search_end = (target as f64 * BREAK_WINDOW_END).floor() as usize;

    let start_byte = byte_offset(text, search_start);
    let end_byte = byte_offset(text, search_end);
    if start_byte >= end_byte {
        return target;
    }

    // 窗口起点可能因代理对顺延，按实际起点换算
    let region_start = char_len(&text[..start_byte]);
    let region = &text[start_byte..end_byte];
    let char_offset = |byte: usize| region_start + char_len(&region[..byte]);

    if let Some(pos) = region.rfind(PARAGRAPH_SEPARATOR) {
        return char_offset(pos) + 2;
    }

    if let Some(pos) = region.rfind('\n') {
        return char_offset(pos) + 1;
    }

    if let Some(pos) = region.rfind(is_sentence_end) {
        return char_offset(pos) + 1;
    }

    target
}

/// 规整章节大小
///
/// - 超过 5000 字的章节按 target 再拆，首个子章沿用原标题，
///   其余命名为"原标题（续k）"
/// - 最后一章不超过 1500 字且至少有两章时，并入前一章（只做一次）
pub fn normalize_chapter_sizes(chapters: Vec<Chapter>, target: usize) -> Vec<Chapter> {
    let mut result = Vec::with_capacity(chapters.len());

    for chapter in chapters {
        if chapter.char_count() <= MAX_CHAPTER_CHARS {
            result.push(chapter);
            continue;
        }

        let (title, content) = chapter.into_parts();
        let parts = split_by_char_count(&content, target);
        debug!(title = %title, parts = parts.len(), "Oversized chapter re-split");

        for (k, mut part) in parts.into_iter().enumerate() {
            if k == 0 {
                part.set_title(title.as_str());
            } else {
                part.set_title(format!("{}（续{}）", title, k));
            }
            result.push(part);
        }
    }

    // 末尾短章合并
    let tail_is_short = result.len() >= 2
        && result
            .last()
            .is_some_and(|last| last.char_count() <= MIN_TAIL_CHARS);

    if tail_is_short {
        if let Some(last) = result.pop() {
            if let Some(prev) = result.last_mut() {
                debug!(
                    title = %last.title(),
                    chars = last.char_count(),
                    "Merging short trailing chapter"
                );
                prev.append_content(PARAGRAPH_SEPARATOR, last.content());
            }
        }
    }

    result
}
