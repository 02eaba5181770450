#![allow(dead_code)]

use dashmap::DashMap;
use query_messaging::{
    Query, QueryError, QueryFuture, QueryGateway, QueryResult, ResponseType,
    ResponseTypeDescriptor,
};
use std::any::{Any, type_name};
use std::future::Future;
use std::sync::{Arc, Mutex};

type BoxAnySend = Box<dyn Any + Send>;

type StubFn = Arc<dyn Fn() -> QueryResult<BoxAnySend> + Send + Sync>;

/// 网关收到的一次调用
#[derive(Clone)]
pub struct RecordedCall {
    pub query_name: String,
    pub query: Arc<dyn Any + Send + Sync>,
    pub response_type: ResponseTypeDescriptor,
    pub future_addr: usize,
}

impl RecordedCall {
    pub fn query_as<Q: 'static>(&self) -> Option<&Q> {
        self.query.downcast_ref::<Q>()
    }
}

/// 记录调用并按 (名称, 响应类型) 返回预设结果的网关
#[derive(Default)]
pub struct RecordingGateway {
    stubs: DashMap<(String, ResponseTypeDescriptor), StubFn>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stub<R, F>(&self, query_name: &str, response_type: R, value: F)
    where
        R: ResponseType,
        F: Fn() -> R::Output + Send + Sync + 'static,
    {
        let f: StubFn = Arc::new(move || Ok(Box::new(value()) as BoxAnySend));
        self.stubs
            .insert((query_name.to_string(), response_type.descriptor()), f);
    }

    pub fn stub_error<R, F>(&self, query_name: &str, response_type: R, error: F)
    where
        R: ResponseType,
        F: Fn() -> QueryError + Send + Sync + 'static,
    {
        let f: StubFn = Arc::new(move || Err(error()));
        self.stubs
            .insert((query_name.to_string(), response_type.descriptor()), f);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl QueryGateway for RecordingGateway {
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
        let descriptor = response_type.descriptor();
        let stub = self
            .stubs
            .get(&(query_name.to_string(), descriptor))
            .map(|s| s.clone());
        let name = query_name.to_string();

        let fut: QueryFuture<R::Output> = Box::pin(async move {
            let Some(stub) = stub else {
                return Err(QueryError::handler_not_found(name, descriptor));
            };
            response_type.convert(stub()?).map_err(|_| {
                QueryError::type_mismatch(type_name::<R::Output>(), descriptor.payload_type())
            })
        });

        self.calls.lock().unwrap().push(RecordedCall {
            query_name: query_name.to_string(),
            query: Arc::new(query),
            response_type: descriptor,
            future_addr: future_addr(&fut),
        });

        fut
    }
}

/// 装箱 future 的地址，用于判断是否为同一个 future
pub fn future_addr<T: 'static>(fut: &QueryFuture<T>) -> usize {
    let ptr: *const (dyn Future<Output = QueryResult<T>> + Send) = &**fut;
    ptr.cast::<()>() as usize
}
