//! エラー型の定義
//!
//! このモジュールは、sfn-report 全体で使用されるエラー型を定義します。
//!
//! # エラーの分類
//!
//! - [`SfnError`]: Step Functions API との通信・ARN 解析に関するエラー
//! - [`ReportError`]: CSV レポートファイルの作成・書き込みに関するエラー
//! - [`AppError`]: 上記を集約したアプリケーション全体のエラー
//!
//! # 伝播ポリシー
//!
//! どのエラーもリトライ・回復は行いません。発生した時点でパイプライン全体を
//! 中断し、プロセスは非ゼロの終了コードで終了します（書き込み済みの出力は
//! ロールバックされません）。

use thiserror::Error;

/// Step Functions API 関連のエラー
#[derive(Debug, Error)]
pub enum SfnError {
    /// ステートマシン一覧の取得に失敗
    #[error("ステートマシン一覧の取得に失敗しました: {0}")]
    ListStateMachines(String),

    /// 実行履歴一覧の取得に失敗
    #[error("実行履歴の取得に失敗しました ({arn}): {message}")]
    ListExecutions {
        /// 対象ステートマシンの ARN
        arn: String,
        /// SDK が返したエラー内容
        message: String,
    },

    /// ステートマシン ARN が想定外の形式
    #[error("ステートマシン ARN の形式が不正です: {0}")]
    MalformedArn(String),
}

/// CSV レポート出力関連のエラー
#[derive(Debug, Error)]
pub enum ReportError {
    /// 出力ファイルの作成・書き込みに失敗
    #[error("レポートファイルの書き込みに失敗しました: {0}")]
    Io(#[from] std::io::Error),

    /// CSV のシリアライズに失敗
    #[error("CSV の出力に失敗しました: {0}")]
    Csv(#[from] csv::Error),
}

/// アプリケーション全体のエラー
///
/// パイプラインの各段階で発生するエラーを集約します。
/// `main` はこの型を受け取り、メッセージを出力して非ゼロ終了します。
#[derive(Debug, Error)]
pub enum AppError {
    /// Step Functions API エラー
    #[error("Step Functions エラー: {0}")]
    Sfn(#[from] SfnError),

    /// レポート出力エラー
    #[error("レポート出力エラー: {0}")]
    Report(#[from] ReportError),

    /// 設定エラー（プロファイル未指定等）
    #[error("設定エラー: {0}")]
    Config(String),
}
