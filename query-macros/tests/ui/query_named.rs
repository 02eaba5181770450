use query_messaging::Query;

#[derive(Query)]
#[query(name = "users.find")]
struct FindUser;

fn main() {
    assert_eq!(FindUser::NAME, "users.find");
    assert_eq!(FindUser.query_name(), "users.find");
}
