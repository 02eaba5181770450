//! 查询网关（QueryGateway）协议
//!
//! 网关负责按名称与响应类型分发查询，并立即返回一个已在进行中的异步结果。
//! 调度、超时、取消与结果完成均由具体实现决定。
//!
use crate::{error::QueryResult, query::Query, response_type::ResponseType};
use futures_core::future::BoxFuture;
use std::sync::Arc;

/// 网关返回的异步结果句柄
pub type QueryFuture<T> = BoxFuture<'static, QueryResult<T>>;

/// 查询网关
///
/// - 该 trait 带有泛型方法，通常以具体实现类型注入使用；
/// - 调用方未给出名称时，使用查询的默认名称 [`Query::NAME`]。
pub trait QueryGateway: Send + Sync {
    /// 以显式名称分发查询
    fn query_named<Q, R>(
        &self,
        query_name: &str,
        query: Q,
        response_type: R,
    ) -> QueryFuture<R::Output>
    where
        Q: Query,
        R: ResponseType;

    /// 以查询的默认名称分发查询
    fn query<Q, R>(&self, query: Q, response_type: R) -> QueryFuture<R::Output>
    where
        Q: Query,
        R: ResponseType,
    {
        self.query_named(Q::NAME, query, response_type)
    }
}

impl<G> QueryGateway for Arc<G>
where
    G: QueryGateway + ?Sized,
{
    fn query_named<Q, R>(
        &self,
        query_name: &str,
        query: Q,
        response_type: R,
    ) -> QueryFuture<R::Output>
    where
        Q: Query,
        R: ResponseType,
    {
        (**self).query_named(query_name, query, response_type)
    }

    fn query<Q, R>(&self, query: Q, response_type: R) -> QueryFuture<R::Output>
    where
        Q: Query,
        R: ResponseType,
    {
        (**self).query(query, response_type)
    }
}
