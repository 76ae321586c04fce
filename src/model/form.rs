//! 表单输入解析：三个文本框 → LocationRecord

use crate::model::data_core::AppError;
use crate::model::record::{Field, LocationRecord};

/// 解析单个输入框文本，允许首尾空白、正负号和数字间的单个下划线（`1_000`）
pub fn parse_field(field: Field, text: &str) -> Result<i64, AppError> {
    strip_digit_separators(text.trim())
        .and_then(|digits| digits.parse::<i64>().ok())
        .ok_or_else(|| AppError::Validation {
            field,
            input: text.to_string(),
        })
}

/// 去掉两侧都是数字的下划线；位置不合法时返回 None
fn strip_digit_separators(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
        let next_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if !(prev_digit && next_digit) {
            return None;
        }
    }
    Some(out)
}

/// 按 X、Y、Floor 顺序解析，任一失败即整体失败
pub fn parse_record(x: &str, y: &str, floor: &str) -> Result<LocationRecord, AppError> {
    Ok(LocationRecord {
        x: parse_field(Field::X, x)?,
        y: parse_field(Field::Y, y)?,
        floor: parse_field(Field::Floor, floor)?,
    })
}
