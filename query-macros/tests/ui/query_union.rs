use query_messaging::Query;

#[derive(Query)]
union Bits {
    raw: u32,
}

fn main() {
    let bits = Bits { raw: 1 };
    let _ = unsafe { bits.raw };
}
