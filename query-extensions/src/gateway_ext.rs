use query_messaging::{
    gateway::{QueryFuture, QueryGateway},
    query::Query,
    response_type::{
        InstanceResponseType, MultipleInstancesResponseType, NullableInstanceResponseType,
        OptionalResponseType, ResponseType,
    },
};

/// 查询网关扩展
///
/// - 根据调用方推断出的结果类型 `R` 选择响应类型，再委托给网关的唯一一次调用；
/// - 返回网关产生的 future 本身，不做包装，也不追加异步阶段；
/// - 错误全部来自网关，原样经 future 传递。
///
/// 不带名称的版本使用网关的默认名称约定（[`QueryGateway::query`]），名称由网关决定，日志中不记录。
pub trait QueryGatewayExt: QueryGateway {
    /// 恰好一个结果
    fn query_for_single<R, Q>(&self, query: Q) -> QueryFuture<R>
    where
        R: Send + 'static,
        Q: Query,
    {
        let response_type = InstanceResponseType::<R>::new();
        trace_dispatch(None, &response_type);
        self.query(query, response_type)
    }

    fn query_for_single_named<R, Q>(&self, query_name: &str, query: Q) -> QueryFuture<R>
    where
        R: Send + 'static,
        Q: Query,
    {
        let response_type = InstanceResponseType::<R>::new();
        trace_dispatch(Some(query_name), &response_type);
        self.query_named(query_name, query, response_type)
    }

    /// 单个结果，允许为空
    ///
    /// 与 [`query_for_single`](Self::query_for_single) 发送相同的响应类型描述，
    /// 因此由同一处理器服务；处理器无结果时解析为 `None`。
    fn query_for_single_nullable<R, Q>(&self, query: Q) -> QueryFuture<Option<R>>
    where
        R: Send + 'static,
        Q: Query,
    {
        let response_type = NullableInstanceResponseType::<R>::new();
        trace_dispatch(None, &response_type);
        self.query(query, response_type)
    }

    fn query_for_single_nullable_named<R, Q>(
        &self,
        query_name: &str,
        query: Q,
    ) -> QueryFuture<Option<R>>
    where
        R: Send + 'static,
        Q: Query,
    {
        let response_type = NullableInstanceResponseType::<R>::new();
        trace_dispatch(Some(query_name), &response_type);
        self.query_named(query_name, query, response_type)
    }

    /// 零或一个结果
    fn query_for_optional<R, Q>(&self, query: Q) -> QueryFuture<Option<R>>
    where
        R: Send + 'static,
        Q: Query,
    {
        let response_type = OptionalResponseType::<R>::new();
        trace_dispatch(None, &response_type);
        self.query(query, response_type)
    }

    fn query_for_optional_named<R, Q>(&self, query_name: &str, query: Q) -> QueryFuture<Option<R>>
    where
        R: Send + 'static,
        Q: Query,
    {
        let response_type = OptionalResponseType::<R>::new();
        trace_dispatch(Some(query_name), &response_type);
        self.query_named(query_name, query, response_type)
    }

    /// 结果集合
    fn query_for_multiple<R, Q>(&self, query: Q) -> QueryFuture<Vec<R>>
    where
        R: Send + 'static,
        Q: Query,
    {
        let response_type = MultipleInstancesResponseType::<R>::new();
        trace_dispatch(None, &response_type);
        self.query(query, response_type)
    }

    fn query_for_multiple_named<R, Q>(&self, query_name: &str, query: Q) -> QueryFuture<Vec<R>>
    where
        R: Send + 'static,
        Q: Query,
    {
        let response_type = MultipleInstancesResponseType::<R>::new();
        trace_dispatch(Some(query_name), &response_type);
        self.query_named(query_name, query, response_type)
    }
}

impl<G> QueryGatewayExt for G where G: QueryGateway + ?Sized {}

// 未显式给出名称时由网关决定路由名，这里只记录响应类型
fn trace_dispatch<T: ResponseType>(query_name: Option<&str>, response_type: &T) {
    match query_name {
        Some(query_name) => tracing::trace!(
            query = query_name,
            response_type = %response_type.descriptor(),
            named = true,
            "dispatching typed query"
        ),
        None => tracing::trace!(
            response_type = %response_type.descriptor(),
            named = false,
            "dispatching typed query"
        ),
    }
}
