//! sfn-report: AWS Step Functions 実行レポート生成ツール
//!
//! Step Functions の全ステートマシンから直近 2 ヶ月の実行履歴を取得し、
//! 2 種類の CSV レポートを出力します。
//!
//! - `sfn.csv`: 実行ごとの生レコード（名前・開始日・実行時間・ステータス）
//! - `aggregate.csv`: ステートマシン名ごとの集計（最大・最小・平均・件数）
//!
//! # パイプライン
//!
//! 取得 → フィルタ/変換 → 生 CSV 出力 → 集計 → 集計 CSV 出力、の単方向・
//! 逐次実行です。どの段階のエラーも即座にプロセスを終了させ、リトライや
//! 部分出力のロールバックは行いません。
//!
//! # モジュール構成
//!
//! - [`sfn`][]: Step Functions API アクセス（トレイト・SDK クライアント・ARN 解析）
//! - [`engine`][]: レコード変換・フィルタリング・集計
//! - [`report`][]: CSV レポートの出力
//! - [`error`][]: エラー型
//!
//! # 使用例
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use sfn_report::engine::{ExecutionFetcher, aggregate_by_name};
//! use sfn_report::report;
//! use sfn_report::sfn::SfnClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SfnClient::from_profile("my-profile").await;
//!
//!     let records = ExecutionFetcher::new(&client).fetch().await?;
//!     report::raw::write(&records, Path::new(report::RAW_CSV_FILE_NAME))?;
//!
//!     let aggregated = aggregate_by_name(&records);
//!     report::aggregate::write(&aggregated, Path::new(report::AGGREGATE_CSV_FILE_NAME))?;
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod report;
pub mod sfn;
