use query_messaging::Query;

#[derive(Query)]
#[query(name = "")]
struct FindUser;

fn main() {
    let _ = FindUser;
}
