// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::{OutputFormat, WatchOutput};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "word_count",
    version = crate::VERSION,
    about = "文字数/音節数/単語数/文数の集計ツール"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 入力ファイル（`-` で標準入力。入力指定が無い場合も標準入力）
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub paths: Vec<String>,

    /// 組み込みテキストを解析（複数指定可）
    #[arg(long, help_heading = "入力")]
    pub resource: Vec<String>,

    /// 文字列を直接解析
    #[arg(long, help_heading = "入力")]
    pub text: Option<String>,

    /// 組み込みテキストの一覧を表示して終了
    #[arg(long, help_heading = "入力")]
    pub list_resources: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// Flesch 読みやすさ指標を追加表示
    #[arg(long, help_heading = "出力")]
    pub readability: bool,

    /// 最終単語と同じ綴りの単語すべてを文末として数える（旧バージョン互換）
    #[arg(long, help_heading = "解析")]
    pub legacy_sentences: bool,

    /// 文字数を UTF-16 コードユニットではなく Unicode スカラー値で数える
    #[arg(long, help_heading = "解析")]
    pub scalar_chars: bool,

    /// 解析したテキストをそのまま保存（入力は1つのみ）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "保存")]
    pub save_as: Option<PathBuf>,

    /// 保存時に上書きせず追記する
    #[arg(long, requires = "save_as", help_heading = "保存")]
    pub append: bool,

    /// 読み込みエラーで即座に終了
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// ファイルの変更を監視して再集計
    #[arg(long, help_heading = "動作")]
    pub watch: bool,

    /// 監視時のデバウンス間隔（秒）
    #[arg(long, requires = "watch", help_heading = "動作")]
    pub watch_interval: Option<u64>,

    /// 監視時の出力形式
    #[arg(long, value_enum, default_value = "full", help_heading = "動作")]
    pub watch_output: WatchOutput,

    /// ログを詳細化（-v: info, -vv: debug）
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
