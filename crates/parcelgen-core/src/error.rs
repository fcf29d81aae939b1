use thiserror::Error;

use crate::rules::RuleCode;

/// Core error type shared across parcelgen crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The catalog lacks a template that defines a package attribute domain.
    #[error("rule catalog has no {0} template")]
    MissingDomainTemplate(RuleCode),
    /// The catalog defines the same domain more than once.
    #[error("rule catalog has {count} {code} templates, expected exactly one")]
    AmbiguousDomainTemplate { code: RuleCode, count: usize },
    /// A domain holds fewer values than a draw requires.
    #[error("cannot sample {requested} distinct values from {available}")]
    Sampling { requested: usize, available: usize },
}

/// Convenience alias for results returned by parcelgen crates.
pub type Result<T> = std::result::Result<T, Error>;
