//! 标记词索引：词 -> 出现位置列表
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// 一次出现：文件名 + 行号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub filename: String,
    pub line_number: usize,
}

/// 跨文件累积的索引
/// - 键按码点升序（BTreeMap），保证输出稳定
/// - 同一词的出现位置保持插入顺序，不去重
#[derive(Debug, Default, Clone)]
pub struct WordIndex {
    words: BTreeMap<String, Vec<Occurrence>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一次出现；词不存在时新建条目
    pub fn add(&mut self, word: &str, line_number: usize, filename: &str) {
        let occurrence = Occurrence { filename: filename.to_string(), line_number };
        self.words.entry(word.to_string()).or_default().push(occurrence);
    }

    pub fn get(&self, word: &str) -> Option<&[Occurrence]> {
        self.words.get(word).map(Vec::as_slice)
    }

    /// 不同词的个数
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn total_occurrences(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    /// 按输出顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.words.iter().map(|(w, occ)| (w.as_str(), occ.as_slice()))
    }

    /// 渲染为文本报告
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// 将报告写入任意输出
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{self}")
    }
}

/// 报告格式：
/// ```text
/// <word>:<count>
/// \t<filename>:<line_number>
/// ```
impl fmt::Display for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (word, occurrences) in &self.words {
            writeln!(f, "{}:{}", word, occurrences.len())?;
            for o in occurrences {
                writeln!(f, "\t{}:{}", o.filename, o.line_number)?;
            }
        }
        Ok(())
    }
}
