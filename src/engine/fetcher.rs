//! 実行履歴の取得とレコード変換
//!
//! # 責務
//!
//! このモジュールは、実行履歴の取得を制御する [`ExecutionFetcher`] を提供します。
//! 全ステートマシンを列挙し、それぞれの実行履歴を取得して、レポート対象の
//! レコード列へ変換します。
//!
//! # 変換ルール
//!
//! 1 件の実行は以下の順で判定されます。
//!
//! 1. 開始・終了タイムスタンプのどちらかが欠けていれば除外（実行中など）
//! 2. 開始時刻が「現在 − 2 ヶ月」より前であれば除外（保持期間外。
//!    ちょうど境界上の実行は含まれる）
//! 3. 残った実行から `実行時間 = 終了時刻 − 開始時刻` を計算し、
//!    ステートマシン ARN から短縮名を抽出してレコードを生成
//!
//! # 使用例
//!
//! ```rust,no_run
//! use sfn_report::engine::fetcher::ExecutionFetcher;
//! use sfn_report::sfn::SfnClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SfnClient::from_profile("my-profile").await;
//!     let fetcher = ExecutionFetcher::new(&client);
//!
//!     let records = fetcher.fetch().await?;
//!     println!("{} 件のレコードを取得しました", records.len());
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use chrono::{DateTime, Months, Utc};
use tracing::{debug, info};

use crate::engine::record::{SfnRecord, SfnRecords};
use crate::error::SfnError;
use crate::sfn::arn::state_machine_name_from_arn;
use crate::sfn::traits::StateMachineApi;

/// 保持期間（月数）。これより古い開始時刻の実行はレポートに含めない。
const RETENTION_MONTHS: u32 = 2;

/// 実行履歴フェッチャー
///
/// [`StateMachineApi`] 越しに全ステートマシンの実行履歴を取得し、
/// フィルタ・変換を適用して [`SfnRecords`] を構築します。
///
/// # エラー
///
/// 一覧取得のいずれかが失敗した時点で即座に [`SfnError`] を返します。
/// リトライや部分的な結果の返却はありません。
pub struct ExecutionFetcher<'a, A: StateMachineApi + ?Sized> {
    api: &'a A,
    cutoff: DateTime<Utc>,
}

impl<'a, A: StateMachineApi + ?Sized> ExecutionFetcher<'a, A> {
    /// 新しいフェッチャーを生成
    ///
    /// 保持期間の境界（カットオフ）は生成時点の「現在 − 2 ヶ月」に固定されます。
    ///
    /// # 引数
    ///
    /// - `api`: 認証済みの Step Functions API クライアント
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            cutoff: Utc::now() - Months::new(RETENTION_MONTHS),
        }
    }

    /// カットオフ時刻を指定してフェッチャーを生成
    ///
    /// テストで境界条件を固定する場合に使用します。
    ///
    /// # 引数
    ///
    /// - `cutoff`: この時刻より前に開始した実行を除外する
    pub fn with_cutoff(api: &'a A, cutoff: DateTime<Utc>) -> Self {
        Self { api, cutoff }
    }

    /// 全ステートマシンの実行履歴を取得し、レコード列へ変換する
    ///
    /// # 戻り値
    ///
    /// - `Ok(SfnRecords)`: 発見順のレコード列
    /// - `Err(SfnError)`: 一覧取得の失敗、または ARN の形式不正
    pub async fn fetch(&self) -> Result<SfnRecords, SfnError> {
        let machines = self.api.list_state_machines().await?;
        info!(count = machines.len(), "ステートマシン一覧を取得しました");

        let mut records = SfnRecords::new();

        for machine in &machines {
            let name = state_machine_name_from_arn(&machine.arn)?;
            let executions = self.api.list_executions(&machine.arn).await?;
            debug!(
                name,
                count = executions.len(),
                "実行履歴を取得しました"
            );

            for execution in executions {
                let (Some(start), Some(stop)) = (execution.start_date, execution.stop_date)
                else {
                    // 実行中・タイムスタンプ欠落はレポート対象外
                    continue;
                };

                if start < self.cutoff {
                    continue;
                }

                // 終了済みの実行では stop >= start が保証される
                let duration = (stop - start).to_std().unwrap_or(Duration::ZERO);

                records.push(SfnRecord {
                    name: name.to_string(),
                    start_date: start.date_naive(),
                    duration,
                    status: execution.status,
                });
            }
        }

        info!(count = records.len(), "レコードへの変換が完了しました");
        Ok(records)
    }
}
