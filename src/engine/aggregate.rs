//! ステートマシン名ごとの集計
//!
//! # 責務
//!
//! レコード列をステートマシンの短縮名でグループ化するモジュール。
//! 集計値（最大・最小・平均・件数）の計算自体は
//! [`SfnRecords`](crate::engine::record::SfnRecords) が担当します。
//!
//! # 出力順について
//!
//! グループは [`BTreeMap`] に保持するため、キー（名前）の昇順で列挙されます。
//! これにより集計 CSV の行順は実行のたびに同一になります。
//! グループ内のレコード順は元のレコード列の順（発見順）を保持します。

use std::collections::BTreeMap;

use crate::engine::record::SfnRecords;

/// 名前からそのレコード群への対応
///
/// グループは必ず 1 件以上のレコードを持ちます（レコードの追加によってのみ
/// グループが作られるため、空のグループは構造上存在しません）。
pub type AggregatedRecordMap = BTreeMap<String, SfnRecords>;

/// レコード列をステートマシン名でグループ化する
///
/// # 引数
///
/// - `records`: フェッチャーが構築したレコード列
///
/// # 戻り値
///
/// 名前順に列挙される [`AggregatedRecordMap`]。入力が空なら空のマップです。
pub fn aggregate_by_name(records: &SfnRecords) -> AggregatedRecordMap {
    let mut aggregated = AggregatedRecordMap::new();

    for record in records {
        aggregated
            .entry(record.name.clone())
            .or_default()
            .push(record.clone());
    }

    aggregated
}
