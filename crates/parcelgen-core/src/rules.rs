use std::fmt;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Hazardous material class as declared by `HAZMAT_ALLOWED`.
pub type HazmatClass = u8;

/// Driver eligibility rule kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleCode {
    MaxWeight,
    NoPerishable,
    RegionOnly,
    MaxDistance,
    ExpressOnly,
    FragileOnly,
    HazmatAllowed,
    TempControl,
    TimeWindow,
    Oversized,
}

impl RuleCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::MaxWeight => "MAX_WEIGHT",
            RuleCode::NoPerishable => "NO_PERISHABLE",
            RuleCode::RegionOnly => "REGION_ONLY",
            RuleCode::MaxDistance => "MAX_DISTANCE",
            RuleCode::ExpressOnly => "EXPRESS_ONLY",
            RuleCode::FragileOnly => "FRAGILE_ONLY",
            RuleCode::HazmatAllowed => "HAZMAT_ALLOWED",
            RuleCode::TempControl => "TEMP_CONTROL",
            RuleCode::TimeWindow => "TIME_WINDOW",
            RuleCode::Oversized => "OVERSIZED",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule code together with its typed parameters.
///
/// Serialized adjacently tagged, e.g.
/// `{"code": "MAX_WEIGHT", "params": {"limit_kg": 10.0}}`. Rules without
/// parameters are empty struct variants so they still emit `"params": {}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "code", content = "params", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleParams {
    MaxWeight { limit_kg: f64 },
    NoPerishable {},
    RegionOnly { allowed_regions: Vec<String> },
    MaxDistance { max_km: f64 },
    ExpressOnly {},
    FragileOnly {},
    HazmatAllowed { allowed_classes: Vec<HazmatClass> },
    TempControl { min_c: f64, max_c: f64 },
    TimeWindow { start_hour: u8, end_hour: u8 },
    Oversized { min_volume_m3: f64 },
}

impl RuleParams {
    pub fn code(&self) -> RuleCode {
        match self {
            RuleParams::MaxWeight { .. } => RuleCode::MaxWeight,
            RuleParams::NoPerishable {} => RuleCode::NoPerishable,
            RuleParams::RegionOnly { .. } => RuleCode::RegionOnly,
            RuleParams::MaxDistance { .. } => RuleCode::MaxDistance,
            RuleParams::ExpressOnly {} => RuleCode::ExpressOnly,
            RuleParams::FragileOnly {} => RuleCode::FragileOnly,
            RuleParams::HazmatAllowed { .. } => RuleCode::HazmatAllowed,
            RuleParams::TempControl { .. } => RuleCode::TempControl,
            RuleParams::TimeWindow { .. } => RuleCode::TimeWindow,
            RuleParams::Oversized { .. } => RuleCode::Oversized,
        }
    }
}

/// Static definition of a rule kind and its default parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RuleTemplate {
    pub params: RuleParams,
}

impl RuleTemplate {
    pub fn new(params: RuleParams) -> Self {
        Self { params }
    }

    pub fn code(&self) -> RuleCode {
        self.params.code()
    }
}

/// Regions declared by the default `REGION_ONLY` template.
pub const DEFAULT_REGIONS: [&str; 4] = ["north", "east", "south", "west"];

/// Classes declared by the default `HAZMAT_ALLOWED` template.
pub const DEFAULT_HAZMAT_CLASSES: [HazmatClass; 4] = [1, 2, 3, 4];

/// The shared rule catalog, built once per process.
pub static RULE_TEMPLATES: LazyLock<Vec<RuleTemplate>> = LazyLock::new(rule_catalog);

/// Build an owned copy of the default rule catalog, in catalog order.
pub fn rule_catalog() -> Vec<RuleTemplate> {
    vec![
        RuleTemplate::new(RuleParams::MaxWeight { limit_kg: 10.0 }),
        RuleTemplate::new(RuleParams::NoPerishable {}),
        RuleTemplate::new(RuleParams::RegionOnly {
            allowed_regions: DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect(),
        }),
        RuleTemplate::new(RuleParams::MaxDistance { max_km: 50.0 }),
        RuleTemplate::new(RuleParams::ExpressOnly {}),
        RuleTemplate::new(RuleParams::FragileOnly {}),
        RuleTemplate::new(RuleParams::HazmatAllowed {
            allowed_classes: DEFAULT_HAZMAT_CLASSES.to_vec(),
        }),
        RuleTemplate::new(RuleParams::TempControl {
            min_c: 2.0,
            max_c: 8.0,
        }),
        RuleTemplate::new(RuleParams::TimeWindow {
            start_hour: 8,
            end_hour: 17,
        }),
        RuleTemplate::new(RuleParams::Oversized { min_volume_m3: 0.5 }),
    ]
}
