use parcelgen_core::RULE_TEMPLATES;
use parcelgen_generate::{FixtureEngine, GenerateOptions};

fn main() {
    let options = GenerateOptions {
        seed: Some(7),
        ..GenerateOptions::default()
    };
    let fixtures = FixtureEngine::new(options)
        .run(&RULE_TEMPLATES)
        .expect("generate fixtures");

    let drivers: Vec<_> = fixtures.drivers.iter().take(3).collect();
    let packages: Vec<_> = fixtures.packages.iter().take(3).collect();

    println!("Sample driver assignments:");
    println!(
        "{}",
        serde_json::to_string_pretty(&drivers).expect("serialize drivers")
    );
    println!("Sample packages:");
    println!(
        "{}",
        serde_json::to_string_pretty(&packages).expect("serialize packages")
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&fixtures.report).expect("serialize report")
    );
}
