use parcelgen_core::{RULE_TEMPLATES, RuleTemplate};
use parcelgen_generate::{
    FixtureEngine, GenerateOptions, GenerationError, generate_driver_rules, generate_packages,
};

fn seeded_options(seed: u64) -> GenerateOptions {
    GenerateOptions {
        seed: Some(seed),
        ..GenerateOptions::default()
    }
}

#[test]
fn default_run_matches_entry_point_shape() {
    let fixtures = FixtureEngine::default()
        .run(&RULE_TEMPLATES)
        .expect("run generation");

    assert_eq!(fixtures.drivers.len(), 99);
    assert_eq!(fixtures.drivers[0].id, "driver_1");
    assert_eq!(fixtures.drivers[98].id, "driver_99");
    assert_eq!(fixtures.packages.len(), 990);
    assert!(fixtures.drivers.iter().all(|d| d.rules.len() <= 2));
}

#[test]
fn seeded_run_matches_direct_calls() {
    let options = seeded_options(17);
    let fixtures = FixtureEngine::new(options.clone())
        .run(&RULE_TEMPLATES)
        .expect("run generation");

    let drivers = generate_driver_rules(
        &options.driver_ids(),
        &RULE_TEMPLATES,
        options.min_rules,
        options.max_rules,
        Some(17),
    )
    .expect("generate drivers");
    let packages = generate_packages(990, &RULE_TEMPLATES, Some(17)).expect("generate packages");

    assert_eq!(fixtures.drivers, drivers);
    assert_eq!(fixtures.packages, packages);
}

#[test]
fn report_counts_match_fixtures() {
    let fixtures = FixtureEngine::new(seeded_options(5))
        .run(&RULE_TEMPLATES)
        .expect("run generation");
    let report = &fixtures.report;

    let rules: usize = fixtures.drivers.iter().map(|d| d.rules.len()).sum();
    assert_eq!(report.drivers, 99);
    assert_eq!(report.packages, 990);
    assert_eq!(report.rules, rules as u64);
    assert_eq!(report.rule_usage.values().sum::<u64>(), rules as u64);
    assert_eq!(
        report.packages_without_hazmat,
        fixtures
            .packages
            .iter()
            .filter(|p| p.hazmat_class.is_none())
            .count() as u64
    );
    assert_eq!(report.seed, Some(5));
}

#[test]
fn invalid_range_fails_the_run() {
    let options = GenerateOptions {
        max_rules: 11,
        ..GenerateOptions::default()
    };
    let result = FixtureEngine::new(options).run(&RULE_TEMPLATES);
    assert!(matches!(result, Err(GenerationError::InvalidRange { .. })));
}

#[test]
fn empty_catalog_fails_the_run() {
    let options = GenerateOptions {
        max_rules: 0,
        ..GenerateOptions::default()
    };
    let templates: Vec<RuleTemplate> = Vec::new();
    let result = FixtureEngine::new(options).run(&templates);
    assert!(matches!(result, Err(GenerationError::Catalog(_))));
}

#[test]
fn options_parse_from_toml_with_defaults() {
    let options = GenerateOptions::from_toml_str(
        r#"
driver_count = 5
max_rules = 4
seed = 12
"#,
    )
    .expect("parse options");

    assert_eq!(options.driver_count, 5);
    assert_eq!(options.max_rules, 4);
    assert_eq!(options.seed, Some(12));
    assert_eq!(options.min_rules, 0);
    assert_eq!(options.packages_per_driver, 10);
    assert_eq!(options.driver_ids(), vec!["driver_1", "driver_2", "driver_3", "driver_4", "driver_5"]);
}

#[test]
fn malformed_toml_is_rejected() {
    let result = GenerateOptions::from_toml_str("driver_count = \"many\"");
    assert!(matches!(result, Err(GenerationError::TomlDecode(_))));
}

#[test]
fn report_serializes_to_json() {
    let fixtures = FixtureEngine::new(GenerateOptions {
        driver_count: 3,
        ..seeded_options(1)
    })
    .run(&RULE_TEMPLATES)
    .expect("run generation");

    let value = serde_json::to_value(&fixtures.report).expect("serialize report");
    assert_eq!(value["drivers"], serde_json::json!(3));
    assert_eq!(value["packages"], serde_json::json!(30));
}
