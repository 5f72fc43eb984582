// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::{ColorChoice, OutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "ls",
    version = crate::VERSION,
    about = "ディレクトリ内のエントリを一覧表示します"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 詳細形式（種別・権限・リンク数・所有者・サイズ・更新日時）で表示
    #[arg(short = 'l', long = "long")]
    pub long: bool,

    /// `.` で始まるエントリも表示
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// サイズを KiB/MiB などの単位で表示
    #[arg(short = 'r', long = "readable")]
    pub readable: bool,

    /// ディレクトリ名・シンボリックリンク名の色付け
    #[arg(long, value_enum, default_value = "auto", help_heading = "出力")]
    pub color: ColorChoice,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "columns", help_heading = "出力")]
    pub format: OutputFormat,

    /// 一覧するディレクトリ（先頭のみ使用、省略時は ./）
    #[arg(value_hint = ValueHint::DirPath, num_args = 0..=99)]
    pub paths: Vec<PathBuf>,
}
