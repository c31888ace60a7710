use super::{
    codec::{decode_standard, encode_standard, is_standard_base64, url_safe_to_standard},
    InvalidInputError, UrlSafeBase64Value, ValueResult,
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

/// 标准 Base64 值
///
/// 字母表包含 `+` 与 `/`，使用 `=` 填充至 4 的倍数长度。
/// 构造时即保证其内容非空且能被成功解码，构造后不可变
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StandardBase64Value {
    inner: SmallString<[u8; 64]>,
}

impl StandardBase64Value {
    /// 从字符串构造标准 Base64 值
    ///
    /// 如果字符串本身就是合法的标准 Base64 字符串，则原样保存，不做任何修复；
    /// 否则将字符串视为 UTF-8 文本，保存其 Base64 编码结果。
    ///
    /// 注意，调用方无法从结果中得知具体采用了哪种解释方式，
    /// 如果需要区分，请使用 [`Self::from_encoded_str`]。
    ///
    /// 字符串为空时返回 [`InvalidInputError::EmptyString`]
    pub fn from_string(s: impl AsRef<str>) -> ValueResult<Self> {
        let s = s.as_ref();
        if s.is_empty() {
            return Err(InvalidInputError::EmptyString);
        }
        if is_standard_base64(s) {
            return Ok(Self::from_verified(s));
        }
        debug!(
            "{} bytes of text is not standard Base64, encode it as UTF-8 text",
            s.len()
        );
        Ok(Self::from_verified(encode_standard(s.as_bytes())))
    }

    /// 从已经编码的标准 Base64 字符串构造
    ///
    /// 与 [`Self::from_string`] 不同，不合法的字符串不会被当作文本重新编码，
    /// 而是返回 [`InvalidInputError::NotBase64`]
    pub fn from_encoded_str(s: &str) -> ValueResult<Self> {
        if s.is_empty() {
            Err(InvalidInputError::EmptyString)
        } else if is_standard_base64(s) {
            Ok(Self::from_verified(s))
        } else {
            Err(InvalidInputError::NotBase64)
        }
    }

    /// 对二进制数据进行编码
    ///
    /// 数据为空时返回 [`InvalidInputError::EmptyBytes`]
    pub fn from_bytes(data: &[u8]) -> ValueResult<Self> {
        if data.is_empty() {
            return Err(InvalidInputError::EmptyBytes);
        }
        Ok(Self::from_verified(encode_standard(data)))
    }

    /// 对任意可以视为二进制数据的数据源进行编码
    #[inline]
    pub fn from_data(data: impl AsRef<[u8]>) -> ValueResult<Self> {
        Self::from_bytes(data.as_ref())
    }

    /// 从 URL 安全的 Base64 值转换
    pub fn from_url_safe(value: &UrlSafeBase64Value) -> Self {
        Self::from_verified(url_safe_to_standard(value.as_str()))
    }

    /// 判断字符串是否为合法的标准 Base64 字符串
    #[inline]
    pub fn is_standard_base64(s: &str) -> bool {
        is_standard_base64(s)
    }

    /// 解码为二进制数据
    ///
    /// # Panics
    ///
    /// 构造时已经保证了内容可以被解码，如果解码失败，说明该保证已被破坏
    pub fn to_bytes(&self) -> Vec<u8> {
        decode_standard(self.as_str())
            .expect("StandardBase64Value must contain decodable standard Base64")
    }

    /// 转换为 URL 安全的 Base64 值
    #[inline]
    pub fn to_url_safe(&self) -> UrlSafeBase64Value {
        UrlSafeBase64Value::from_standard(self)
    }
}

impl From<&UrlSafeBase64Value> for StandardBase64Value {
    #[inline]
    fn from(value: &UrlSafeBase64Value) -> Self {
        Self::from_url_safe(value)
    }
}

impl From<UrlSafeBase64Value> for StandardBase64Value {
    #[inline]
    fn from(value: UrlSafeBase64Value) -> Self {
        Self::from_url_safe(&value)
    }
}

wrap_base64_value!(StandardBase64Value);
