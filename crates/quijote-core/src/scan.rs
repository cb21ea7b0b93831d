//! 索引主流程（串行）
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, error, info};

use crate::error::IndexError;
use crate::file::{scan_file_with, LineResult};
use crate::index::WordIndex;
use crate::options::{IndexOptions, IndexStats};
use crate::tokenizer::Tokenizer;

/// 一次完整运行的结果
#[derive(Debug, Default)]
pub struct IndexRun {
    pub index: WordIndex,
    pub stats: IndexStats,
    /// 读取中途失败的文件（结果已部分并入索引）
    pub read_errors: Vec<IndexError>,
}

/// 按给定顺序逐个扫描文件并累积到索引
/// - 任一文件打开失败：立即返回错误，不产出任何结果
/// - 读取中途失败：记录错误，保留该文件已得到的行，继续下一个文件
pub fn index_files(paths: &[PathBuf], opts: &IndexOptions) -> Result<IndexRun, IndexError> {
    let tokenizer = Tokenizer::new(opts);
    let mut run = IndexRun::default();

    for path in paths {
        let filename = path.to_string_lossy();
        debug!(file = %filename, "scanning file");

        // 文件句柄只在本轮循环内存活，无论成败都会被释放
        let file = File::open(path).map_err(|source| IndexError::Open { path: path.clone(), source })?;
        let lines = match scan_file_with(&tokenizer, BufReader::new(file)) {
            Ok(lines) => lines,
            Err(failure) => {
                let (partial, err) = failure.into_index_error(path.clone());
                error!(file = %filename, error = %err, kept_lines = partial.len(), "read failed");
                run.stats.read_failures += 1;
                run.read_errors.push(err);
                partial
            }
        };

        run.stats.files_scanned += 1;
        merge_lines(&mut run, &lines, &filename);
        debug!(file = %filename, lines_with_markers = lines.len(), "file done");
    }

    Ok(run)
}

fn merge_lines(run: &mut IndexRun, lines: &[LineResult], filename: &str) {
    for line in lines {
        run.stats.lines_with_markers += 1;
        for word in &line.words {
            run.index.add(word, line.line_number, filename);
            run.stats.occurrences_indexed += 1;
        }
    }
}

/// `index_and_write` 的返回：统计信息与读取中途失败的文件
#[derive(Debug, Default)]
pub struct IndexOutcome {
    pub stats: IndexStats,
    pub read_errors: Vec<IndexError>,
}

/// 扫描全部文件后再一次性写出报告
/// 打开失败时 `out` 不会被写入任何内容；读取失败由调用方决定如何上报
pub fn index_and_write(paths: &[PathBuf], out: &mut dyn Write, opts: &IndexOptions) -> Result<IndexOutcome> {
    info!(files = paths.len(), "starting index");
    let run = index_files(paths, opts)?;

    run.index.write_to(out).context("write report")?;

    info!(
        files_scanned = run.stats.files_scanned,
        words = run.index.len(),
        occurrences = run.stats.occurrences_indexed,
        read_failures = run.stats.read_failures,
        "index finished"
    );
    Ok(IndexOutcome { stats: run.stats, read_errors: run.read_errors })
}
