use thiserror::Error;

/// Errors emitted by the fixture generators.
#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error(
        "invalid rule range: min_rules={min_rules}, max_rules={max_rules}, catalog size={catalog_size}"
    )]
    InvalidRange {
        min_rules: usize,
        max_rules: usize,
        catalog_size: usize,
    },
    #[error("catalog error: {0}")]
    Catalog(#[from] parcelgen_core::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}
