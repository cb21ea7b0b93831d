//! 选项文件加载（TOML）
//!
//! 示例：
//! ```toml
//! min_word_len = 3
//! ```
use anyhow::{Context, Result};
use std::path::Path;

use crate::error::IndexError;
use crate::options::IndexOptions;

/// 从 TOML 文件加载索引选项；未出现的字段使用默认值
pub fn load_options(path: &Path) -> Result<IndexOptions> {
    let txt = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let opts = parse_options(&txt).map_err(|message| IndexError::Config {
        path: path.to_path_buf(),
        message,
    })?;
    Ok(opts)
}

/// 解析并校验选项文本
fn parse_options(txt: &str) -> std::result::Result<IndexOptions, String> {
    let opts: IndexOptions = toml::from_str(txt).map_err(|e| e.to_string())?;
    if opts.min_word_len == 0 {
        return Err("min_word_len must be at least 1".to_string());
    }
    Ok(opts)
}
