use query_messaging::Query;

#[derive(Query)]
#[query(title = "users.find")]
struct FindUser;

fn main() {
    let _ = FindUser;
}
