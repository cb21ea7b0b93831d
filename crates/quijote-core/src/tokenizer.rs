//! 分词与归一化
//!
//! 两级切分：
//! - 先按终止符（`.` `:`）把一行切成若干片段；
//! - 再在片段内按“非字母且非数字”的字符切出子词，丢弃空串。
//!
//! 归一化只保留字母（数字在此处被剔除），转小写后长度不足则无效。

use crate::options::IndexOptions;

/// 句/子句终止符
pub const TERMINATORS: [char; 2] = ['.', ':'];

#[inline]
pub fn is_terminator(ch: char) -> bool {
    TERMINATORS.contains(&ch)
}

/// 分词器（持有最小词长）
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_word_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&IndexOptions::default())
    }
}

impl Tokenizer {
    pub fn new(opts: &IndexOptions) -> Self {
        Self { min_word_len: opts.min_word_len }
    }

    /// 按终止符切分；n 个终止符总是得到 n+1 个片段（可为空）
    pub fn segments<'a>(&self, line: &'a str) -> impl Iterator<Item = &'a str> {
        line.split(is_terminator)
    }

    /// 行是否以终止符结尾
    pub fn ends_with_terminator(&self, line: &str) -> bool {
        line.chars().next_back().is_some_and(is_terminator)
    }

    /// 归一化：仅保留字母并转小写；长度（字符数）不足返回 None
    /// 小写映射可能引入组合符（如 'İ' -> "i\u{307}"），因此转换后再过滤一次
    pub fn normalize(&self, token: &str) -> Option<String> {
        let word: String = token
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphabetic())
            .collect();
        if word.chars().count() < self.min_word_len {
            return None;
        }
        Some(word)
    }
}

/// 片段内的子词：字母或数字（仅 ASCII 0-9）的最大连续段
pub fn sub_tokens(segment: &str) -> impl Iterator<Item = &str> {
    segment.split(|c: char| !is_word_char(c)).filter(|s| !s.is_empty())
}

/// 片段的首个子词（只有紧跟终止符的词才有意义）
pub fn first_token(segment: &str) -> Option<&str> {
    sub_tokens(segment).next()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

/// 使用默认选项归一化单个词
pub fn normalize_word(token: &str) -> Option<String> {
    Tokenizer::default().normalize(token)
}
