use thiserror::Error;

/// 输入无效错误
///
/// 构造 Base64 值时唯一可能返回的错误，各个变体说明了具体是哪条规则未能通过
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidInputError {
    /// 输入的字符串为空
    #[error("Invalid input: empty string")]
    EmptyString,
    /// 输入的二进制数据为空
    #[error("Invalid input: empty bytes")]
    EmptyBytes,
    /// 输入的字符串不是合法的 Base64 字符串
    #[error("Invalid input: not a valid Base64 string")]
    NotBase64,
}

/// 构造 Base64 值的结果
pub type ValueResult<T> = Result<T, InvalidInputError>;
