/// 查询（Query）
///
/// 表达只读意图的消息载荷，对网关扩展层而言是不透明的值。
///
/// 关联常量：
/// - `NAME`：查询的默认名称。调用方未显式给出名称时，网关以此路由。
///   约定为类型的完整路径（如 `app::queries::FindOrder`），
///   `#[derive(Query)]` 按此约定生成，也可通过 `#[query(name = "...")]` 覆写为稳定名称。
pub trait Query: Send + Sync + 'static {
    /// 查询的默认名称
    const NAME: &'static str;

    fn query_name(&self) -> &'static str {
        Self::NAME
    }
}
