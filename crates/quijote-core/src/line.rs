//! 行扫描器
//!
//! 状态（“下一个词是否紧跟终止符”）不保存在扫描器内部，而是显式传入、显式返回：
//! 上一行的返回值就是下一行的输入。
use crate::tokenizer::{first_token, Tokenizer};

/// 单行扫描结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineScan {
    /// 传给下一行的标志
    pub next_carry: bool,
    /// 本行的标记词（按出现顺序）
    pub words: Vec<String>,
}

/// 使用默认选项扫描一行
pub fn scan_line(carry: bool, line: &str) -> LineScan {
    scan_line_with(&Tokenizer::default(), carry, line)
}

/// 扫描一行：
/// - 第一个片段是否计入取决于 `carry`，之后每个片段都紧跟一个终止符；
/// - 每个片段只看首个子词，归一化有效才记录；
/// - 行末恰为终止符则下一行首词计入；空行原样传递 `carry`。
pub fn scan_line_with(tokenizer: &Tokenizer, carry: bool, line: &str) -> LineScan {
    if line.is_empty() {
        return LineScan { next_carry: carry, words: Vec::new() };
    }

    let mut words = Vec::new();
    let mut qualifies = carry;
    for segment in tokenizer.segments(line) {
        if qualifies {
            if let Some(word) = first_token(segment).and_then(|tok| tokenizer.normalize(tok)) {
                words.push(word);
            }
        }
        qualifies = true;
    }

    LineScan { next_carry: tokenizer.ends_with_terminator(line), words }
}
