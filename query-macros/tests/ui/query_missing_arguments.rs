use query_messaging::Query;

#[derive(Query)]
#[query]
struct FindUser;

fn main() {
    let _ = FindUser;
}
