//! AWS SDK ベースの Step Functions クライアント
//!
//! # 責務
//!
//! - 名前付きプロファイルから Step Functions のセッションを構築
//! - `aws-sdk-sfn` を呼び出し、[`StateMachineApi`] トレイトを実装
//! - SDK 固有の型（`aws_smithy_types::DateTime` 等）から共通型への変換
//!
//! # 認証について
//!
//! 認証は AWS SDK の共有設定チェーン（`~/.aws/config` / `~/.aws/credentials`）
//! に委譲します。プロファイルが AssumeRole や MFA を要求する場合の
//! トークン解決も SDK 側の責務であり、このモジュールでは扱いません。
//! AssumeRole のセッション有効期間は SDK 既定の 1 時間です。
//!
//! # 使用例
//!
//! ```rust,no_run
//! use sfn_report::sfn::{SfnClient, StateMachineApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 事前に ~/.aws/config へのプロファイル設定が必要
//!     let client = SfnClient::from_profile("my-profile").await;
//!
//!     let machines = client.list_state_machines().await?;
//!     for machine in &machines {
//!         println!("{}", machine.arn);
//!     }
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sfn::error::DisplayErrorContext;
use chrono::{DateTime, Utc};

use super::traits::{ExecutionItem, StateMachineApi, StateMachineSummary};
use crate::error::SfnError;

/// AWS SDK ベースの Step Functions クライアント
///
/// 名前付きプロファイルから構築した認証済みセッションを内包します。
/// セッションは起動時に一度だけ構築し、以降はこのクライアントを
/// 明示的に受け渡して使用します。
pub struct SfnClient {
    client: aws_sdk_sfn::Client,
}

impl SfnClient {
    /// 名前付きプロファイルからクライアントを構築する
    ///
    /// # 引数
    ///
    /// - `profile`: `~/.aws/config` 上のプロファイル名
    ///
    /// # 認証エラーについて
    ///
    /// この関数自体は認証情報を検証しません。プロファイルが存在しない・
    /// 認証に失敗する場合は、最初の API 呼び出しが [`SfnError`] で失敗します。
    pub async fn from_profile(profile: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .load()
            .await;

        Self {
            client: aws_sdk_sfn::Client::new(&config),
        }
    }

    /// 構築済みの SDK クライアントをそのまま利用する
    ///
    /// リージョンやエンドポイントを調整したテスト・検証時に使用します。
    pub fn from_client(client: aws_sdk_sfn::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StateMachineApi for SfnClient {
    async fn list_state_machines(&self) -> Result<Vec<StateMachineSummary>, SfnError> {
        let output = self
            .client
            .list_state_machines()
            .send()
            .await
            .map_err(|e| SfnError::ListStateMachines(DisplayErrorContext(&e).to_string()))?;

        let machines = output
            .state_machines()
            .iter()
            .map(|machine| StateMachineSummary {
                arn: machine.state_machine_arn().to_string(),
            })
            .collect();

        Ok(machines)
    }

    async fn list_executions(
        &self,
        state_machine_arn: &str,
    ) -> Result<Vec<ExecutionItem>, SfnError> {
        let output = self
            .client
            .list_executions()
            .state_machine_arn(state_machine_arn)
            .send()
            .await
            .map_err(|e| SfnError::ListExecutions {
                arn: state_machine_arn.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let executions = output
            .executions()
            .iter()
            .map(|execution| ExecutionItem {
                status: execution.status().as_str().to_string(),
                start_date: to_chrono(execution.start_date()),
                stop_date: execution.stop_date().and_then(to_chrono),
            })
            .collect();

        Ok(executions)
    }
}

/// SDK のタイムスタンプ型を `chrono` の UTC 時刻へ変換する
///
/// 表現範囲外の値（`chrono` が扱えない秒数）は `None` になり、
/// フェッチャー側でタイムスタンプ欠落として扱われます。
fn to_chrono(date: &aws_smithy_types::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(date.secs(), date.subsec_nanos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_chrono_converts_epoch_seconds() {
        let date = aws_smithy_types::DateTime::from_secs(1_704_067_200); // 2024-01-01T00:00:00Z
        let converted = to_chrono(&date).unwrap();
        assert_eq!(converted.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_to_chrono_keeps_subsecond_precision() {
        let date = aws_smithy_types::DateTime::from_fractional_secs(100, 0.5);
        let converted = to_chrono(&date).unwrap();
        assert_eq!(converted.timestamp(), 100);
        assert_eq!(converted.timestamp_subsec_millis(), 500);
    }
}
