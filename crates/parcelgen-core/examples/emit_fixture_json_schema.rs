use parcelgen_core::{Driver, Package};
use schemars::schema_for;

fn main() {
    let schemas = serde_json::json!({
        "driver": schema_for!(Driver),
        "package": schema_for!(Package),
    });
    let json = serde_json::to_string_pretty(&schemas).expect("serialize json schema");
    println!("{json}");
}
