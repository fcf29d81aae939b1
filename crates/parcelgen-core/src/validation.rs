use crate::error::{Error, Result};
use crate::rules::{HazmatClass, RuleCode, RuleParams, RuleTemplate};

/// Package attribute domains declared by a rule catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDomains {
    pub regions: Vec<String>,
    pub hazmat_classes: Vec<HazmatClass>,
}

/// Validate that a catalog declares the package attribute domains.
///
/// This checks:
/// - exactly one `REGION_ONLY` template, with at least one region
/// - exactly one `HAZMAT_ALLOWED` template
pub fn validate_catalog(templates: &[RuleTemplate]) -> Result<CatalogDomains> {
    let regions = match single_template(templates, RuleCode::RegionOnly)? {
        RuleParams::RegionOnly { allowed_regions } => allowed_regions.clone(),
        _ => return Err(Error::MissingDomainTemplate(RuleCode::RegionOnly)),
    };
    if regions.is_empty() {
        return Err(Error::Sampling {
            requested: 1,
            available: 0,
        });
    }

    let hazmat_classes = match single_template(templates, RuleCode::HazmatAllowed)? {
        RuleParams::HazmatAllowed { allowed_classes } => allowed_classes.clone(),
        _ => return Err(Error::MissingDomainTemplate(RuleCode::HazmatAllowed)),
    };

    Ok(CatalogDomains {
        regions,
        hazmat_classes,
    })
}

fn single_template(templates: &[RuleTemplate], code: RuleCode) -> Result<&RuleParams> {
    let mut matches = templates.iter().filter(|t| t.code() == code);
    let first = matches.next().ok_or(Error::MissingDomainTemplate(code))?;
    let extra = matches.count();
    if extra > 0 {
        return Err(Error::AmbiguousDomainTemplate {
            code,
            count: extra + 1,
        });
    }
    Ok(&first.params)
}
