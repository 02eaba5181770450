//! 查询网关扩展（query-extensions）
//!
//! 在 [`QueryGateway`](query_messaging::QueryGateway) 之上提供按结果形态推断响应类型的便捷调用：
//! `query_for_single`、`query_for_single_nullable`、`query_for_optional`、`query_for_multiple` 及其带名称版本。
//!
//! ```ignore
//! use query_extensions::QueryGatewayExt;
//!
//! let name: String = gateway.query_for_single(FindUserName { id: 1 }).await?;
//! let users: Vec<UserDto> = gateway.query_for_multiple_named("users.list", ListUsers).await?;
//! ```
//!
pub mod gateway_ext;

pub use gateway_ext::QueryGatewayExt;
pub use query_messaging;
