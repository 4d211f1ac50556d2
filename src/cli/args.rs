// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "wordlist_lines",
    version = crate::VERSION,
    about = "DNS ラベル形式のワードリストを検証し、行数を集計するツール"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 結果をファイルへ書き出す（一時ファイル経由で置き換え）
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 進捗を標準エラーに表示
    #[arg(long, help_heading = "出力")]
    pub progress: bool,

    /// 対象拡張子（カンマ区切り/複数指定可, 空文字で全ファイル）
    #[arg(long, value_delimiter = ',', default_value = "txt", help_heading = "走査")]
    pub ext: Vec<String>,

    /// 対象ファイル一覧（1行1パス）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "走査")]
    pub files_from: Option<PathBuf>,

    /// 隠しファイルも対象
    #[arg(long, help_heading = "走査")]
    pub hidden: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査")]
    pub follow: bool,

    /// .gitignore 等を無視しない
    #[arg(long, help_heading = "走査")]
    pub no_gitignore: bool,

    /// 走査する最大深さ
    #[arg(long, help_heading = "走査")]
    pub max_depth: Option<usize>,

    /// 並列数（既定: CPU 数）
    #[arg(short, long, help_heading = "実行")]
    pub jobs: Option<usize>,

    /// 読み取りエラーで即座に失敗する
    #[arg(long, help_heading = "実行")]
    pub strict: bool,

    /// ログを詳細にする（-v, -vv, -vvv）
    #[arg(short, long, action = ArgAction::Count, help_heading = "実行")]
    pub verbose: u8,

    /// 対象パス（ファイル/ディレクトリ, `-` で標準入力）
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,
}
