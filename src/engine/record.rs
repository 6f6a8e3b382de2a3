//! 実行レコードの型定義
//!
//! # 責務
//!
//! - 1 回の実行を表す [`SfnRecord`] の型定義
//! - レコード列 [`SfnRecords`] と、その上の集計値（最大・最小・平均・件数）の計算
//! - 実行時間の表示形式（秒、小数 2 桁）への変換
//!
//! # 主要な型
//!
//! - [`SfnRecord`][]: フィルタ・変換済みの 1 実行分のレコード（以後不変）
//! - [`SfnRecords`][]: 発見順を保持したレコード列
//!
//! # 使用例
//!
//! ```rust
//! use std::time::Duration;
//! use chrono::NaiveDate;
//! use sfn_report::engine::record::{SfnRecord, SfnRecords};
//!
//! let records = SfnRecords::from(vec![SfnRecord {
//!     name: "my-flow".to_string(),
//!     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     duration: Duration::from_secs(90),
//!     status: "SUCCEEDED".to_string(),
//! }]);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records.max_duration(), Duration::from_secs(90));
//! ```

use std::time::Duration;

use chrono::NaiveDate;

/// フィルタ・変換済みの 1 実行分のレコード
///
/// フェッチャーが生成した後は不変で、CSV 出力と集計にのみ使用されます。
///
/// # 不変条件
///
/// - `duration` は非負（同一実行の終了時刻 − 開始時刻として導出される）
/// - 開始・終了タイムスタンプの揃っていない実行からは生成されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfnRecord {
    /// ステートマシンの短縮名（ARN から抽出）
    pub name: String,

    /// 実行開始日（日付精度、時刻は持たない）
    pub start_date: NaiveDate,

    /// 実行時間（終了時刻 − 開始時刻）
    pub duration: Duration,

    /// 実行の終了ステータス（例: `SUCCEEDED`）
    pub status: String,
}

impl SfnRecord {
    /// 実行時間を秒単位・小数 2 桁の文字列にする
    ///
    /// # 例
    ///
    /// ```rust
    /// # use std::time::Duration;
    /// # use chrono::NaiveDate;
    /// # use sfn_report::engine::record::SfnRecord;
    /// let record = SfnRecord {
    ///     name: "f".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     duration: Duration::from_millis(3_661_500),
    ///     status: "SUCCEEDED".to_string(),
    /// };
    /// assert_eq!(record.duration_seconds_string(), "3661.50");
    /// ```
    pub fn duration_seconds_string(&self) -> String {
        duration_seconds_string(self.duration)
    }
}

/// 実行時間を秒単位・小数 2 桁の文字列にする
pub fn duration_seconds_string(duration: Duration) -> String {
    format!("{:.2}", duration.as_secs_f64())
}

/// 発見順を保持したレコード列
///
/// 挿入順 = 発見順（ステートマシンの列挙順 × 実行の列挙順。どちらも
/// API 側の順序であり、ここでは規定しません）。
#[derive(Debug, Clone, Default)]
pub struct SfnRecords(Vec<SfnRecord>);

impl SfnRecords {
    /// 空のレコード列を生成
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 末尾にレコードを追加
    pub fn push(&mut self, record: SfnRecord) {
        self.0.push(record);
    }

    /// レコード件数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// レコードが 1 件もないか
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 発見順のイテレーター
    pub fn iter(&self) -> std::slice::Iter<'_, SfnRecord> {
        self.0.iter()
    }

    /// 最大の実行時間
    ///
    /// # パニック
    ///
    /// レコード列が空の場合はパニックします。集計グループは必ず 1 件以上の
    /// レコードから構築されるため、パイプライン上この状況は発生しません
    /// （呼び出し側の事前条件）。
    pub fn max_duration(&self) -> Duration {
        let mut max = self.0[0].duration;
        for record in &self.0 {
            if record.duration > max {
                max = record.duration;
            }
        }
        max
    }

    /// 最小の実行時間
    ///
    /// # パニック
    ///
    /// レコード列が空の場合はパニックします（[`SfnRecords::max_duration`] と
    /// 同じ事前条件）。
    pub fn min_duration(&self) -> Duration {
        let mut min = self.0[0].duration;
        for record in &self.0 {
            if record.duration < min {
                min = record.duration;
            }
        }
        min
    }

    /// 平均の実行時間
    ///
    /// 合計を件数で割った値です。除算は `Duration` のナノ秒精度で行われ、
    /// 表示時の小数 2 桁への丸め以外の丸めは現れません。
    ///
    /// # パニック
    ///
    /// レコード列が空の場合はパニックします（[`SfnRecords::max_duration`] と
    /// 同じ事前条件）。
    pub fn avg_duration(&self) -> Duration {
        let total: Duration = self.0.iter().map(|record| record.duration).sum();
        total / self.0.len() as u32
    }
}

impl From<Vec<SfnRecord>> for SfnRecords {
    fn from(records: Vec<SfnRecord>) -> Self {
        Self(records)
    }
}

impl<'a> IntoIterator for &'a SfnRecords {
    type Item = &'a SfnRecord;
    type IntoIter = std::slice::Iter<'a, SfnRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
