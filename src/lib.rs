#![deny(
    missing_debug_implementations,
    absolute_paths_not_starting_with_crate,
    anonymous_parameters,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    meta_variable_misuse,
    missing_docs,
    non_ascii_idents,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unstable_features,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications
)]

//! # qiniu-base64-value
//!
//! ## 七牛 Base64 值类型库
//!
//! 提供两种不可变的 Base64 文本值类型：
//!
//! - [`StandardBase64Value`]：标准 Base64（字母表包含 `+` 与 `/`，使用 `=` 填充）
//! - [`UrlSafeBase64Value`]：URL 安全的 Base64（字母表包含 `-` 与 `_`，不填充）
//!
//! 两者之间，以及两者与二进制数据之间，都可以无损地相互转换。
//!
//! ```
//! use qiniu_base64_value::{StandardBase64Value, UrlSafeBase64Value};
//!
//! let standard = StandardBase64Value::from_bytes(b"Hello world")?;
//! assert_eq!(standard.as_str(), "SGVsbG8gd29ybGQ=");
//!
//! let url_safe = standard.to_url_safe();
//! assert_eq!(url_safe.as_str(), "SGVsbG8gd29ybGQ");
//! assert_eq!(url_safe.to_bytes(), b"Hello world");
//! # Ok::<(), qiniu_base64_value::InvalidInputError>(())
//! ```

#[macro_use]
mod macros;

pub mod codec;

mod error;
pub use error::{InvalidInputError, ValueResult};

mod standard;
pub use standard::StandardBase64Value;

mod url_safe;
pub use url_safe::UrlSafeBase64Value;
