use super::{
    codec::{is_standard_base64, is_url_safe_base64, standard_to_url_safe},
    InvalidInputError, StandardBase64Value, ValueResult,
};
use log::debug;
use serde::{
    de::{Deserialize, Deserializer, Error, Visitor},
    ser::{Serialize, Serializer},
};
use smallstr::SmallString;
use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    str::FromStr,
};

/// URL 安全的 Base64 值
///
/// 字母表包含 `-` 与 `_`，不使用 `=` 填充。
/// 解码时总是先转换为 [`StandardBase64Value`]，不保存对其的任何引用
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UrlSafeBase64Value {
    inner: SmallString<[u8; 64]>,
}

impl UrlSafeBase64Value {
    /// 从字符串构造 URL 安全的 Base64 值
    ///
    /// 如果字符串本身就是合法的 URL 安全的 Base64 字符串，则原样保存；
    /// 否则交由 [`StandardBase64Value::from_string`] 处理，保存其转换结果。
    /// 因此标准 Base64 字符串与普通文本也都能被接受，且无法区分。
    ///
    /// 字符串为空时返回 [`InvalidInputError::EmptyString`]
    pub fn from_string(s: impl AsRef<str>) -> ValueResult<Self> {
        let s = s.as_ref();
        if is_url_safe_base64(s) {
            return Ok(Self::from_verified(s));
        }
        debug!(
            "{} bytes of text is not URL-safe Base64, try to treat it as standard Base64",
            s.len()
        );
        StandardBase64Value::from_string(s).map(|value| value.to_url_safe())
    }

    /// 从已经编码的 URL 安全的 Base64 字符串构造
    ///
    /// 不合法的字符串返回 [`InvalidInputError::NotBase64`]
    pub fn from_encoded_str(s: &str) -> ValueResult<Self> {
        if s.is_empty() {
            Err(InvalidInputError::EmptyString)
        } else if is_url_safe_base64(s) {
            Ok(Self::from_verified(s))
        } else {
            Err(InvalidInputError::NotBase64)
        }
    }

    /// 从已经编码的标准 Base64 字符串构造
    ///
    /// 不合法的字符串返回 [`InvalidInputError::NotBase64`]
    pub fn from_standard_str(s: &str) -> ValueResult<Self> {
        if s.is_empty() {
            Err(InvalidInputError::EmptyString)
        } else if is_standard_base64(s) {
            Ok(Self::from_verified(standard_to_url_safe(s)))
        } else {
            Err(InvalidInputError::NotBase64)
        }
    }

    /// 对二进制数据进行编码
    ///
    /// 数据为空时返回 [`InvalidInputError::EmptyBytes`]
    pub fn from_bytes(data: &[u8]) -> ValueResult<Self> {
        StandardBase64Value::from_bytes(data).map(|value| value.to_url_safe())
    }

    /// 对任意可以视为二进制数据的数据源进行编码
    #[inline]
    pub fn from_data(data: impl AsRef<[u8]>) -> ValueResult<Self> {
        Self::from_bytes(data.as_ref())
    }

    /// 从标准 Base64 值转换
    pub fn from_standard(value: &StandardBase64Value) -> Self {
        Self::from_verified(standard_to_url_safe(value.as_str()))
    }

    /// 判断字符串是否为合法的 URL 安全的 Base64 字符串
    #[inline]
    pub fn is_url_safe_base64(s: &str) -> bool {
        is_url_safe_base64(s)
    }

    /// 解码为二进制数据
    ///
    /// # Panics
    ///
    /// 构造时已经保证了内容可以被解码，如果解码失败，说明该保证已被破坏
    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_standard().to_bytes()
    }

    /// 转换为标准 Base64 值
    #[inline]
    pub fn to_standard(&self) -> StandardBase64Value {
        StandardBase64Value::from_url_safe(self)
    }
}

impl From<&StandardBase64Value> for UrlSafeBase64Value {
    #[inline]
    fn from(value: &StandardBase64Value) -> Self {
        Self::from_standard(value)
    }
}

impl From<StandardBase64Value> for UrlSafeBase64Value {
    #[inline]
    fn from(value: StandardBase64Value) -> Self {
        Self::from_standard(&value)
    }
}

wrap_base64_value!(UrlSafeBase64Value);
