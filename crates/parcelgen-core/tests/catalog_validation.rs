use parcelgen_core::{
    DEFAULT_HAZMAT_CLASSES, DEFAULT_REGIONS, Error, RULE_TEMPLATES, RuleCode, RuleParams,
    RuleTemplate, rule_catalog, validate_catalog,
};

#[test]
fn default_catalog_has_ten_distinct_codes_in_order() {
    let codes: Vec<RuleCode> = RULE_TEMPLATES.iter().map(|t| t.code()).collect();
    assert_eq!(
        codes,
        vec![
            RuleCode::MaxWeight,
            RuleCode::NoPerishable,
            RuleCode::RegionOnly,
            RuleCode::MaxDistance,
            RuleCode::ExpressOnly,
            RuleCode::FragileOnly,
            RuleCode::HazmatAllowed,
            RuleCode::TempControl,
            RuleCode::TimeWindow,
            RuleCode::Oversized,
        ]
    );
}

#[test]
fn default_catalog_declares_both_domains() {
    let domains = validate_catalog(&RULE_TEMPLATES).expect("valid catalog");
    assert_eq!(domains.regions, DEFAULT_REGIONS.map(String::from).to_vec());
    assert_eq!(domains.hazmat_classes, DEFAULT_HAZMAT_CLASSES.to_vec());
}

#[test]
fn missing_region_template_is_rejected() {
    let templates: Vec<RuleTemplate> = rule_catalog()
        .into_iter()
        .filter(|t| t.code() != RuleCode::RegionOnly)
        .collect();

    assert_eq!(
        validate_catalog(&templates),
        Err(Error::MissingDomainTemplate(RuleCode::RegionOnly))
    );
}

#[test]
fn missing_hazmat_template_is_rejected() {
    let templates: Vec<RuleTemplate> = rule_catalog()
        .into_iter()
        .filter(|t| t.code() != RuleCode::HazmatAllowed)
        .collect();

    assert_eq!(
        validate_catalog(&templates),
        Err(Error::MissingDomainTemplate(RuleCode::HazmatAllowed))
    );
}

#[test]
fn duplicated_domain_template_is_rejected() {
    let mut templates = rule_catalog();
    templates.push(RuleTemplate::new(RuleParams::HazmatAllowed {
        allowed_classes: vec![9],
    }));

    assert_eq!(
        validate_catalog(&templates),
        Err(Error::AmbiguousDomainTemplate {
            code: RuleCode::HazmatAllowed,
            count: 2,
        })
    );
}

#[test]
fn empty_region_list_is_rejected() {
    let templates = vec![
        RuleTemplate::new(RuleParams::RegionOnly {
            allowed_regions: Vec::new(),
        }),
        RuleTemplate::new(RuleParams::HazmatAllowed {
            allowed_classes: vec![1],
        }),
    ];

    assert_eq!(
        validate_catalog(&templates),
        Err(Error::Sampling {
            requested: 1,
            available: 0,
        })
    );
}

#[test]
fn empty_hazmat_list_is_accepted() {
    let templates = vec![
        RuleTemplate::new(RuleParams::RegionOnly {
            allowed_regions: vec!["north".to_string()],
        }),
        RuleTemplate::new(RuleParams::HazmatAllowed {
            allowed_classes: Vec::new(),
        }),
    ];

    let domains = validate_catalog(&templates).expect("valid catalog");
    assert!(domains.hazmat_classes.is_empty());
}

#[test]
fn error_messages_name_the_rule_code() {
    let err = Error::MissingDomainTemplate(RuleCode::RegionOnly);
    assert_eq!(err.to_string(), "rule catalog has no REGION_ONLY template");
}
