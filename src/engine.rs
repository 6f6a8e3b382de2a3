//! レポート生成パイプラインの中核
//!
//! # 責務
//!
//! - Step Functions API からの実行履歴取得とレコードへの変換
//! - 保持期間（直近 2 ヶ月）によるフィルタリング
//! - ステートマシン名ごとの集計（最大・最小・平均・件数）
//!
//! # データフロー
//!
//! 取得 → フィルタ/変換 → 生レコード CSV 出力 → 集計 → 集計 CSV 出力、の
//! 一方向パイプラインです。途中状態の保存やリトライはありません。
//!
//! # モジュール構成
//!
//! - [`record`][]: レコード型（[`SfnRecord`] / [`SfnRecords`]）と集計値の計算
//! - [`fetcher`][]: 実行履歴の取得とレコード変換
//! - [`aggregate`][]: ステートマシン名ごとのグループ化

pub mod aggregate;
pub mod fetcher;
pub mod record;

// 公開APIの再エクスポート
pub use aggregate::{AggregatedRecordMap, aggregate_by_name};
pub use fetcher::ExecutionFetcher;
pub use record::{SfnRecord, SfnRecords, duration_seconds_string};
