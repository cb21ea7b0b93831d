use anyhow::{Context, Result};
use clap::Parser;
use quijote_core::{index_and_write, load_options, IndexError, IndexOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "quijote", version, about = "Index the words that follow each '.' or ':' in text files")]
struct Cli {
    /// 输入文件（按顺序处理，至少一个）
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// 报告输出文件；缺省写到标准输出
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// 选项文件（TOML），可覆盖最小词长
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    let opts = match &cli.config {
        Some(path) => load_options(path).context("load config")?,
        None => IndexOptions::default(),
    };
    info!(files = cli.files.len(), ?opts, "options resolved");

    match cli.output {
        // 先在内存中生成完整报告，成功后才创建输出文件
        Some(path) => {
            let mut report = Vec::new();
            let outcome = index_and_write(&cli.files, &mut report, &opts)?;
            report_read_errors(&outcome.read_errors);
            std::fs::write(&path, report).with_context(|| format!("write output file {}", path.display()))?;
            info!(output = ?path, "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let outcome = index_and_write(&cli.files, &mut out, &opts)?;
            out.flush().context("flush stdout")?;
            report_read_errors(&outcome.read_errors);
        }
    }

    Ok(())
}

/// 读取失败不中断运行，但无论日志等级如何都要出现在 stderr
fn report_read_errors(errors: &[IndexError]) {
    for err in errors {
        eprintln!("error: {err}");
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只留给报告
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
