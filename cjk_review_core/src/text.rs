//! 字符层面的小工具：字母数字判断、大写判断、码位展示、输入法组字差分。

use crate::error::{ReviewError, Result};

/// 表意逗号，单字拼读时用来连接全部描述。
pub const IDEOGRAPHIC_COMMA: char = '\u{3001}';
/// 全角空格，输入法组字窗口用它补位。
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// 首字符是否为 ASCII 字母或数字。
///
/// 字母数字走宿主默认的拼读（含音标式拼读），不进入字符描述循环。
/// 数字也算在内：输入 `1` 不会念字符描述，这与只认字母的判断不同。
pub fn is_alphanumeric(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
}

/// 至少含一个有大小写之分的字符，且这些字符全是大写。
pub fn is_upper(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// 单个字符的码位；空串或多字符串返回 `InvalidCharacter`。
pub fn code_point(text: &str) -> Result<u32> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(u32::from(c)),
        _ => Err(ReviewError::InvalidCharacter(text.to_owned())),
    }
}

/// `0x6e2c` 形式。
pub fn hex(code_point: u32) -> String {
    format!("{code_point:#x}")
}

/// 追加到描述列表末尾的码位条目：`28204,0 - x - 6 - e - 2 - c`。
///
/// 十六进制逐字符用 ` - ` 隔开，朗读时会被逐个念出。
pub fn code_point_entry(code_point: u32) -> String {
    let spelled: Vec<String> = hex(code_point).chars().map(String::from).collect();
    format!("{code_point},{}", spelled.join(" - "))
}

/// 组字串从 `old` 变成 `new` 时新插入的部分（去掉公共前缀与公共后缀）。
pub fn calculate_inserted_chars(old: &str, new: &str) -> String {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    let min_len = old.len().min(new.len());

    let mut start = 0;
    while start < min_len && old[start] == new[start] {
        start += 1;
    }
    // 后缀不能与前缀重叠
    let mut suffix = 0;
    while suffix < min_len - start && old[old.len() - suffix - 1] == new[new.len() - suffix - 1] {
        suffix += 1;
    }
    new[start..new.len() - suffix].iter().collect()
}
