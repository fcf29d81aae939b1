//! Core contracts for parcelgen.
//!
//! This crate defines the rule catalog, the fixture record types, and the
//! catalog validation shared by the generators and the CLI.

pub mod error;
pub mod rules;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use rules::{
    DEFAULT_HAZMAT_CLASSES, DEFAULT_REGIONS, HazmatClass, RULE_TEMPLATES, RuleCode, RuleParams,
    RuleTemplate, rule_catalog,
};
pub use types::{Driver, Package, RuleInstance};
pub use validation::{CatalogDomains, validate_catalog};
