//! 索引选项与统计信息（模块）
use serde::Deserialize;

/// 标记词的最小长度（按字符计，过滤后）
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// 索引选项
/// - 可由 TOML 配置文件覆盖（见 config.rs），缺省字段取默认值
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexOptions {
    /// 归一化后词的最小字符数；不足则丢弃
    pub min_word_len: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self { min_word_len: DEFAULT_MIN_WORD_LEN }
    }
}

/// 索引统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub files_scanned: usize,
    pub lines_with_markers: usize,
    pub occurrences_indexed: usize,
    pub read_failures: usize,
}
