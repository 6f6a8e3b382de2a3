//! 生レコード CSV の出力
//!
//! # 責務
//!
//! フィルタ・変換済みのレコード列を 1 行 1 レコードで CSV に書き出す
//! モジュール。行順はレコード列の順（発見順）をそのまま保持します。
//!
//! # 出力形式
//!
//! ```csv
//! Name,StartDate,Duration,Status
//! order-flow,2024-06-01,60.00,SUCCEEDED
//! ```
//!
//! - `StartDate`: `YYYY-MM-DD`
//! - `Duration`: 秒単位・小数 2 桁

use std::path::Path;

use serde::Serialize;

use crate::engine::record::SfnRecords;
use crate::error::ReportError;

/// ヘッダー行。レコードが 0 件でも必ず出力する。
const HEADER: [&str; 4] = ["Name", "StartDate", "Duration", "Status"];

/// 生レコード CSV の 1 行
#[derive(Debug, Serialize)]
struct RawCsvRow<'a> {
    name: &'a str,
    start_date: String,
    duration: String,
    status: &'a str,
}

/// レコード列を CSV ファイルへ書き出す
///
/// 既存ファイルは上書きされます。ファイルハンドルは成功・失敗いずれの
/// 経路でも関数終了時に閉じられます。
///
/// # 引数
///
/// - `records`: 書き出すレコード列
/// - `path`: 出力先パス（通常は [`crate::report::RAW_CSV_FILE_NAME`]）
///
/// # 戻り値
///
/// - `Ok(())`: 全行の書き込みとフラッシュに成功
/// - `Err(ReportError)`: ファイル作成・書き込みの失敗
pub fn write(records: &SfnRecords, path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(HEADER)?;

    for record in records {
        writer.serialize(RawCsvRow {
            name: &record.name,
            start_date: record.start_date.format("%Y-%m-%d").to_string(),
            duration: record.duration_seconds_string(),
            status: &record.status,
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

    use crate::engine::record::SfnRecord;

    fn record(name: &str, date: (i32, u32, u32), secs: u64, status: &str) -> SfnRecord {
        SfnRecord {
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            duration: Duration::from_secs(secs),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_writes_header_and_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sfn.csv");

        let records = SfnRecords::from(vec![
            record("b-flow", (2024, 6, 2), 120, "FAILED"),
            record("a-flow", (2024, 6, 1), 60, "SUCCEEDED"),
        ]);

        write(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Name,StartDate,Duration,Status\n\
             b-flow,2024-06-02,120.00,FAILED\n\
             a-flow,2024-06-01,60.00,SUCCEEDED\n"
        );
    }

    #[test]
    fn test_empty_records_write_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sfn.csv");

        write(&SfnRecords::new(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Name,StartDate,Duration,Status\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sfn.csv");
        std::fs::write(&path, "stale contents\n").unwrap();

        let records = SfnRecords::from(vec![record("a", (2024, 1, 1), 1, "SUCCEEDED")]);
        write(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.starts_with("Name,StartDate,Duration,Status\n"));
    }

    #[test]
    fn test_roundtrip_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sfn.csv");

        let records = SfnRecords::from(vec![
            record("a", (2024, 1, 1), 10, "SUCCEEDED"),
            record("b", (2024, 2, 2), 20, "ABORTED"),
        ]);
        write(&records, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();

        assert_eq!(
            rows,
            vec![
                vec!["a", "2024-01-01", "10.00", "SUCCEEDED"],
                vec!["b", "2024-02-02", "20.00", "ABORTED"],
            ]
        );
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let path = Path::new("/nonexistent-dir/sfn.csv");
        let err = write(&SfnRecords::new(), path).unwrap_err();
        assert!(matches!(err, ReportError::Csv(_) | ReportError::Io(_)));
    }
}
