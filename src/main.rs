//! sfn-report の CLI エントリポイント
//!
//! # 責務
//!
//! - コマンドライン引数（`--profile`）の解釈
//! - ロギングの初期化
//! - パイプラインの組み立てと実行、終了コードの決定
//!
//! # 終了コード
//!
//! - `0`: 両 CSV の出力まで成功
//! - 非ゼロ: いずれかの段階でのエラー（API・ファイル出力・設定）

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sfn_report::engine::{ExecutionFetcher, aggregate_by_name};
use sfn_report::error::AppError;
use sfn_report::report;
use sfn_report::sfn::SfnClient;

/// Step Functions の実行履歴から CSV レポートを生成する
#[derive(Debug, Parser)]
#[command(name = "sfn-report", version)]
struct Cli {
    /// 認証に使用する AWS プロファイル名
    #[arg(long)]
    profile: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli.profile).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// パイプライン本体
///
/// 取得 → 生 CSV 出力 → 集計 → 集計 CSV 出力を逐次実行します。
/// どの段階のエラーもそのまま伝播し、書き込み済みのファイルは残ります。
async fn run(profile: &str) -> Result<(), AppError> {
    if profile.trim().is_empty() {
        return Err(AppError::Config(
            "プロファイル名が指定されていません".to_string(),
        ));
    }

    let client = SfnClient::from_profile(profile).await;

    let records = ExecutionFetcher::new(&client).fetch().await?;

    let raw_path = Path::new(report::RAW_CSV_FILE_NAME);
    report::raw::write(&records, raw_path)?;
    info!(path = %raw_path.display(), rows = records.len(), "生レコード CSV を出力しました");

    let aggregated = aggregate_by_name(&records);
    let aggregate_path = Path::new(report::AGGREGATE_CSV_FILE_NAME);
    report::aggregate::write(&aggregated, aggregate_path)?;
    info!(
        path = %aggregate_path.display(),
        groups = aggregated.len(),
        "集計 CSV を出力しました"
    );

    Ok(())
}
