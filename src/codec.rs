//! Base64 字母表转换库
//!
//! 提供标准 Base64 与 URL 安全的 Base64 之间的字母表转换，以及两种字母表的合法性判断

use base64::DecodeError;
use std::iter;

const PAD: char = '=';

/// 将标准 Base64 字符串转换为 URL 安全的 Base64 字符串
///
/// 将 `+` 替换为 `-`，将 `/` 替换为 `_`，再去掉末尾所有的 `=` 填充字符
pub fn standard_to_url_safe(text: &str) -> String {
    text.trim_end_matches(PAD)
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

/// 将 URL 安全的 Base64 字符串转换为标准 Base64 字符串
///
/// 将 `-` 替换为 `+`，将 `_` 替换为 `/`，再在末尾补齐 `=`，直到长度为 4 的倍数
pub fn url_safe_to_standard(text: &str) -> String {
    let padding = (4 - text.len() % 4) % 4;
    let mut standard = String::with_capacity(text.len() + padding);
    standard.extend(text.chars().map(|c| match c {
        '-' => '+',
        '_' => '/',
        c => c,
    }));
    standard.extend(iter::repeat(PAD).take(padding));
    standard
}

/// 判断字符串是否为合法的标准 Base64 字符串
///
/// 字符串必须非空，长度为 4 的倍数，且能用标准字母表严格解码。
/// 包含空白字符、换行符或字母表以外字符的字符串都不合法
pub fn is_standard_base64(text: &str) -> bool {
    !text.is_empty() && text.len() % 4 == 0 && decode_standard(text).is_ok()
}

/// 判断字符串是否为合法的 URL 安全的 Base64 字符串
///
/// 字符串必须非空，只能包含 `A-Z`，`a-z`，`0-9`，`-` 和 `_`，
/// 且转换为标准 Base64 字符串后能够成功解码
pub fn is_url_safe_base64(text: &str) -> bool {
    !text.is_empty()
        && text.bytes().all(is_url_safe_byte)
        && decode_standard(&url_safe_to_standard(text)).is_ok()
}

fn is_url_safe_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

pub(crate) fn encode_standard(data: &[u8]) -> String {
    base64::encode_config(data, base64::STANDARD)
}

pub(crate) fn decode_standard(text: &str) -> Result<Vec<u8>, DecodeError> {
    base64::decode_config(text, base64::STANDARD)
}
