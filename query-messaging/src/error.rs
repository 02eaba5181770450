//! 查询网关统一错误定义
//!
//! 错误由网关实现产生并经返回的 future 传递给调用方；
//! 扩展层既不捕获也不转换。
//!
use crate::response_type::ResponseTypeDescriptor;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("handler not found: query={query_name}, response_type={response_type}")]
    HandlerNotFound {
        query_name: String,
        response_type: ResponseTypeDescriptor,
    },
    #[error("query execution failed: query={query_name}, reason={reason}")]
    Execution { query_name: String, reason: String },
    #[error("query timed out: query={query_name}, timeout_ms={timeout_ms}")]
    Timeout { query_name: String, timeout_ms: u64 },
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch { expected: String, found: String },
}

impl QueryError {
    pub fn handler_not_found(
        query_name: impl Into<String>,
        response_type: ResponseTypeDescriptor,
    ) -> Self {
        QueryError::HandlerNotFound {
            query_name: query_name.into(),
            response_type,
        }
    }

    pub fn execution(query_name: impl Into<String>, reason: impl Into<String>) -> Self {
        QueryError::Execution {
            query_name: query_name.into(),
            reason: reason.into(),
        }
    }

    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        QueryError::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type QueryResult<T> = Result<T, QueryError>;
