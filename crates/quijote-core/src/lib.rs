//! 标记词索引核心库
//!
//! 设计要点：
//! - “标记词”指紧跟终止符（`.` `:`）之后的词，小写、至少 3 个字母。
//! - 终止符可能出现在行尾，因此行与行之间传递一个布尔标志（carry），显式传入/返回，扫描器本身无状态。
//! - 索引按词的码点升序输出，同一词的出现位置保持插入顺序，保证结果可复现。
//! - 全程串行：文件按参数顺序处理，行按顺序处理。

mod config;
mod error;
mod file;
mod index;
mod line;
mod options;
mod scan;
mod tokenizer;

pub use config::load_options;
pub use error::{IndexError, ReadFailure};
pub use file::{scan_file, scan_file_with, LineResult};
pub use index::{Occurrence, WordIndex};
pub use line::{scan_line, scan_line_with, LineScan};
pub use options::{IndexOptions, IndexStats, DEFAULT_MIN_WORD_LEN};
pub use scan::{index_and_write, index_files, IndexOutcome, IndexRun};
pub use tokenizer::{first_token, is_terminator, normalize_word, sub_tokens, Tokenizer, TERMINATORS};
