use proc_macro::TokenStream;

mod attr;
mod query;

/// 查询派生宏
/// - 自动为目标类型实现 `::query_messaging::query::Query`
/// - 默认名称为类型的完整路径：`concat!(module_path!(), "::", "Type")`
/// - 支持参数：`#[query(name = "...")]` 覆写为稳定名称
#[proc_macro_derive(Query, attributes(query))]
pub fn derive_query(input: TokenStream) -> TokenStream {
    query::expand(input)
}
