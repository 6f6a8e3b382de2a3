//! 集計 CSV の出力
//!
//! # 責務
//!
//! ステートマシン名ごとの集計結果を 1 行 1 グループで CSV に書き出す
//! モジュール。行順はグループのキー順（名前の昇順）です。
//!
//! # 出力形式
//!
//! ```csv
//! Name,Max,Min,Avg,Len
//! order-flow,120.00,60.00,90.00,2
//! ```
//!
//! - `Max` / `Min` / `Avg`: 秒単位・小数 2 桁
//! - `Len`: グループ内のレコード件数

use std::path::Path;

use serde::Serialize;

use crate::engine::aggregate::AggregatedRecordMap;
use crate::engine::record::duration_seconds_string;
use crate::error::ReportError;

/// ヘッダー行。グループが 0 件でも必ず出力する。
const HEADER: [&str; 5] = ["Name", "Max", "Min", "Avg", "Len"];

/// 集計 CSV の 1 行
#[derive(Debug, Serialize)]
struct AggregateCsvRow<'a> {
    name: &'a str,
    max: String,
    min: String,
    avg: String,
    len: usize,
}

/// グループ化済みレコードを集計 CSV ファイルへ書き出す
///
/// 既存ファイルは上書きされます。各グループの最大・最小・平均・件数を
/// 計算して 1 行ずつ出力します。
///
/// # 引数
///
/// - `aggregated`: 名前ごとにグループ化されたレコード
/// - `path`: 出力先パス（通常は [`crate::report::AGGREGATE_CSV_FILE_NAME`]）
///
/// # 戻り値
///
/// - `Ok(())`: 全行の書き込みとフラッシュに成功
/// - `Err(ReportError)`: ファイル作成・書き込みの失敗
pub fn write(aggregated: &AggregatedRecordMap, path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(HEADER)?;

    for (name, records) in aggregated {
        writer.serialize(AggregateCsvRow {
            name,
            max: duration_seconds_string(records.max_duration()),
            min: duration_seconds_string(records.min_duration()),
            avg: duration_seconds_string(records.avg_duration()),
            len: records.len(),
        })?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use chrono::NaiveDate;

    use crate::engine::aggregate::aggregate_by_name;
    use crate::engine::record::{SfnRecord, SfnRecords};

    fn record(name: &str, secs: u64) -> SfnRecord {
        SfnRecord {
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            duration: Duration::from_secs(secs),
            status: "SUCCEEDED".to_string(),
        }
    }

    #[test]
    fn test_writes_one_row_per_group_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aggregate.csv");

        let records = SfnRecords::from(vec![
            record("beta", 10),
            record("alpha", 20),
            record("beta", 30),
            record("beta", 20),
        ]);
        let aggregated = aggregate_by_name(&records);

        write(&aggregated, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Name,Max,Min,Avg,Len\n\
             alpha,20.00,20.00,20.00,1\n\
             beta,30.00,10.00,20.00,3\n"
        );
    }

    #[test]
    fn test_empty_map_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aggregate.csv");

        write(&AggregatedRecordMap::new(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Name,Max,Min,Avg,Len\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aggregate.csv");
        std::fs::write(&path, "stale contents\n").unwrap();

        write(&AggregatedRecordMap::new(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Name,Max,Min,Avg,Len\n");
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let path = Path::new("/nonexistent-dir/aggregate.csv");
        let err = write(&AggregatedRecordMap::new(), path).unwrap_err();
        assert!(matches!(err, ReportError::Csv(_) | ReportError::Io(_)));
    }
}
