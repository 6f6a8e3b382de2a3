//! Step Functions API の共通インターフェース定義
//!
//! # 責務
//!
//! - Step Functions API を抽象化するトレイト [`StateMachineApi`] を定義
//! - SDK 非依存の一覧取得結果型 [`StateMachineSummary`] / [`ExecutionItem`] を提供
//!
//! フェッチャー（[`crate::engine::fetcher::ExecutionFetcher`]）はこのトレイト
//! 越しに API を利用するため、テストではインメモリのフェイク実装に
//! 差し替えられます。

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::SfnError;

/// Step Functions API の共通インターフェース
///
/// # 実装要件
///
/// - `Send + Sync`: マルチスレッド環境で安全に使用可能
/// - 非同期実行対応（`async_trait` を使用）
///
/// # エラー
///
/// どちらの操作も失敗時は [`SfnError`] を返し、呼び出し側（フェッチャー）は
/// リトライせずそのまま伝播します。
#[async_trait]
pub trait StateMachineApi: Send + Sync {
    /// 登録済みステートマシンの一覧を取得する
    async fn list_state_machines(&self) -> Result<Vec<StateMachineSummary>, SfnError>;

    /// 指定したステートマシンの実行履歴一覧を取得する
    ///
    /// # 引数
    ///
    /// - `state_machine_arn`: 対象ステートマシンの ARN
    async fn list_executions(
        &self,
        state_machine_arn: &str,
    ) -> Result<Vec<ExecutionItem>, SfnError>;
}

/// ステートマシン一覧の 1 エントリ
#[derive(Debug, Clone)]
pub struct StateMachineSummary {
    /// ステートマシンの ARN
    /// （例: `arn:aws:states:ap-northeast-1:123456789012:stateMachine:my-flow`）
    pub arn: String,
}

/// 実行履歴一覧の 1 エントリ
///
/// SDK 固有の型から変換済みの、パイプラインが必要とする最小限の情報です。
/// 実行中などで終了していない実行は `stop_date` が `None` になります。
#[derive(Debug, Clone)]
pub struct ExecutionItem {
    /// 実行の終了ステータス（例: `SUCCEEDED`, `FAILED`）
    pub status: String,

    /// 実行開始時刻
    pub start_date: Option<DateTime<Utc>>,

    /// 実行終了時刻（未終了の場合は `None`）
    pub stop_date: Option<DateTime<Utc>>,
}
