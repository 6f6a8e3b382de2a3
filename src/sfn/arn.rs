//! ステートマシン ARN の解析
//!
//! # 責務
//!
//! ステートマシンの完全修飾 ARN から短縮名（ステートマシン名）を取り出す
//! 関数を提供するモジュール。
//!
//! # ARN の形式
//!
//! ```text
//! arn:aws:states:<region>:<account-id>:stateMachine:<name>
//! ```
//!
//! 短縮名はコロン区切りの 7 番目のフィールド（0 始まりでインデックス 6）に
//! 固定位置で埋め込まれています。位置指定の split をそのまま添字アクセス
//! すると不正な入力で範囲外参照になるため、ここでは形式を検査し、想定外の
//! 形式には [`SfnError::MalformedArn`] を返します。

use crate::error::SfnError;

/// ARN 内で短縮名が現れるコロン区切りフィールドの位置
const NAME_FIELD_INDEX: usize = 6;

/// ステートマシン ARN から短縮名を取り出す
///
/// # 引数
///
/// - `arn`: ステートマシンの完全修飾 ARN
///
/// # 戻り値
///
/// - `Ok(&str)`: 短縮名（ARN 内のスライス）
/// - `Err(SfnError::MalformedArn)`: フィールド数が不足している、または
///   名前フィールドが空の場合
///
/// # 例
///
/// ```rust
/// use sfn_report::sfn::state_machine_name_from_arn;
///
/// let arn = "arn:aws:states:ap-northeast-1:123456789012:stateMachine:my-flow";
/// assert_eq!(state_machine_name_from_arn(arn).unwrap(), "my-flow");
/// ```
pub fn state_machine_name_from_arn(arn: &str) -> Result<&str, SfnError> {
    let name = arn
        .split(':')
        .nth(NAME_FIELD_INDEX)
        .ok_or_else(|| SfnError::MalformedArn(arn.to_string()))?;

    if name.is_empty() {
        return Err(SfnError::MalformedArn(arn.to_string()));
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_name_from_well_formed_arn() {
        let arn = "arn:aws:states:ap-northeast-1:123456789012:stateMachine:order-processing";
        assert_eq!(
            state_machine_name_from_arn(arn).unwrap(),
            "order-processing"
        );
    }

    #[test]
    fn test_name_with_trailing_fields_is_truncated_at_colon() {
        // 実行 ARN のように後続フィールドがあっても 7 番目だけを返す
        let arn = "arn:aws:states:us-east-1:123456789012:stateMachine:my-flow:extra";
        assert_eq!(state_machine_name_from_arn(arn).unwrap(), "my-flow");
    }

    #[test]
    fn test_too_few_fields_is_rejected() {
        let err = state_machine_name_from_arn("arn:aws:states").unwrap_err();
        assert!(matches!(err, SfnError::MalformedArn(_)));
    }

    #[test]
    fn test_empty_name_field_is_rejected() {
        let arn = "arn:aws:states:us-east-1:123456789012:stateMachine:";
        let err = state_machine_name_from_arn(arn).unwrap_err();
        assert!(matches!(err, SfnError::MalformedArn(_)));
    }

    #[test]
    fn test_empty_string_is_rejected() {
        assert!(state_machine_name_from_arn("").is_err());
    }
}
