//! 领域层统一错误定义
//!
use thiserror::Error;

/// 统一错误类型（领域层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    #[error("invalid name: {reason}")]
    InvalidName { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
