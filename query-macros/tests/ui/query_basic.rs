use query_messaging::Query;

#[derive(Query)]
struct FindUser {
    #[allow(dead_code)]
    id: u32,
}

#[derive(Query)]
enum Lookup {
    #[allow(dead_code)]
    ById(u32),
    #[allow(dead_code)]
    ByName(String),
}

fn main() {
    assert_eq!(FindUser::NAME, concat!(module_path!(), "::FindUser"));
    assert!(Lookup::NAME.ends_with("::Lookup"));
}
