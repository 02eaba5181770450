use query_messaging::Query;

#[derive(Query)]
#[query(name = 42)]
struct FindUser;

fn main() {
    let _ = FindUser;
}
