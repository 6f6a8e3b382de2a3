//! AWS Step Functions アクセスレイヤー
//!
//! # 責務
//!
//! - Step Functions API を抽象化する共通トレイト [`StateMachineApi`] の提供
//! - AWS SDK ベースのクライアント実装 [`SfnClient`] と、名前付きプロファイル
//!   からのセッション構築
//! - ステートマシン ARN からの短縮名抽出
//!
//! # アーキテクチャ
//!
//! このモジュールは **認証を AWS SDK に委譲する** 設計です。
//! 名前付きプロファイルの解決、AssumeRole、MFA トークンの入力等は
//! SDK の共有設定チェーンが担当し、コード内では扱いません。
//!
//! # モジュール構成
//!
//! - `traits` - 共通インターフェース（[`StateMachineApi`] トレイト等）
//! - `client` - AWS SDK (`aws-sdk-sfn`) ベースのクライアント
//! - `arn` - ステートマシン ARN の解析

pub mod arn;
pub mod client;
pub mod traits;

// 公開APIの再エクスポート
pub use arn::state_machine_name_from_arn;
pub use client::SfnClient;
pub use traits::{ExecutionItem, StateMachineApi, StateMachineSummary};
