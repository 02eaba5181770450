use query_messaging::Query;

#[derive(Query)]
struct Page<T>
where
    T: Send + Sync + 'static,
{
    #[allow(dead_code)]
    filter: T,
}

fn main() {
    assert_eq!(<Page<u32>>::NAME, <Page<String>>::NAME);
    assert!(<Page<()>>::NAME.ends_with("::Page"));
}
