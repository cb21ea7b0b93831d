//! 错误类型
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::file::LineResult;

/// 索引流程中的错误
#[derive(Debug, Error)]
pub enum IndexError {
    /// 打开输入文件失败：整次运行终止，不输出报告
    #[error("opening file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 读取过程中出错：该文件在出错处停止，已收集的结果保留
    #[error("reading file {} at line {line_number}: {source}", path.display())]
    Read {
        path: PathBuf,
        line_number: usize,
        #[source]
        source: io::Error,
    },

    /// 配置文件无法解析
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

/// 流读取中途失败，附带失败前已收集的行结果
#[derive(Debug, Error)]
#[error("read failed at line {line_number}: {source}")]
pub struct ReadFailure {
    /// 读取失败的行号（1 起）
    pub line_number: usize,
    /// 失败前已得到的行结果
    pub partial: Vec<LineResult>,
    #[source]
    pub source: io::Error,
}

impl ReadFailure {
    /// 附上文件路径，拆分为（已收集结果, IndexError::Read）
    pub fn into_index_error(self, path: PathBuf) -> (Vec<LineResult>, IndexError) {
        let err = IndexError::Read { path, line_number: self.line_number, source: self.source };
        (self.partial, err)
    }
}
