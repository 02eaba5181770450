//! 查询网关契约（query-messaging）
//!
//! 定义查询侧消息的最小协议，供上层扩展与具体网关实现共同依赖：
//! - 查询载荷（`query`）及其默认名称约定
//! - 响应类型描述（`response_type`）：单实例、可选实例、多实例
//! - 查询网关（`gateway`）：按名称与响应类型分发查询，返回异步结果
//! - 统一错误（`error`）
//!
//! 本 crate 不包含总线、处理器注册或序列化等实现，仅描述网关的对外接口，
//! 以便在不同基础设施上进行适配。
//!
pub mod error;
pub mod gateway;
pub mod query;
pub mod response_type;

pub use error::{QueryError, QueryResult};
pub use gateway::{QueryFuture, QueryGateway};
pub use query::Query;
pub use response_type::{
    InstanceResponseType, MultipleInstancesResponseType, NullableInstanceResponseType,
    OptionalResponseType, ResponseKind, ResponseType, ResponseTypeDescriptor,
};

#[cfg(feature = "derive")]
pub use query_macros::Query;

// 允许在本 crate 内部通过 ::query_messaging 进行自引用，
// 以便派生宏在本 crate 的单元测试中也能解析到 ::query_messaging 路径。
extern crate self as query_messaging;
