//! 文件扫描器：逐行驱动行扫描器，记录行号
use std::io::BufRead;

use crate::error::ReadFailure;
use crate::line::scan_line_with;
use crate::tokenizer::Tokenizer;

/// 含至少一个标记词的行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    /// 行号（1 起）
    pub line_number: usize,
    pub words: Vec<String>,
}

/// 使用默认选项扫描整个流
pub fn scan_file<R: BufRead>(reader: R) -> Result<Vec<LineResult>, ReadFailure> {
    scan_file_with(&Tokenizer::default(), reader)
}

/// 按行扫描；每个流开始时 carry 重置为 false
/// - 以字节读取并有损转换为 UTF-8，非法字节不会中断扫描
/// - 读取出错时停止，并把已收集的结果随错误一并返回
pub fn scan_file_with<R: BufRead>(tokenizer: &Tokenizer, mut reader: R) -> Result<Vec<LineResult>, ReadFailure> {
    let mut results = Vec::new();
    let mut carry = false;
    let mut buf: Vec<u8> = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        let n = match reader.read_until(b'\n', &mut buf) {
            Ok(n) => n,
            Err(source) => {
                return Err(ReadFailure { line_number: line_number + 1, partial: results, source });
            }
        };
        if n == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        let scan = scan_line_with(tokenizer, carry, &line);
        carry = scan.next_carry;
        if !scan.words.is_empty() {
            results.push(LineResult { line_number, words: scan.words });
        }
    }

    Ok(results)
}

/// 去掉行尾的 `\n` 或 `\r\n`
fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
