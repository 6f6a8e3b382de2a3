//! CSV レポートの出力
//!
//! # 責務
//!
//! - 生レコード CSV（`sfn.csv`）の出力
//! - 集計 CSV（`aggregate.csv`）の出力
//!
//! どちらもカレントディレクトリの固定ファイル名へ書き出し、既存ファイルは
//! 上書きします。書き込みエラーはその時点でパイプライン全体を中断します
//! （先に書き終えたファイルはそのまま残ります）。
//!
//! # モジュール構成
//!
//! - [`raw`][]: 生レコード CSV（`Name,StartDate,Duration,Status`）
//! - [`aggregate`][]: 集計 CSV（`Name,Max,Min,Avg,Len`）

pub mod aggregate;
pub mod raw;

/// 生レコード CSV の出力ファイル名（カレントディレクトリ相対）
pub const RAW_CSV_FILE_NAME: &str = "sfn.csv";

/// 集計 CSV の出力ファイル名（カレントディレクトリ相対）
pub const AGGREGATE_CSV_FILE_NAME: &str = "aggregate.csv";
