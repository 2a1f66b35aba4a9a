#[derive(Debug, thiserror::Error)]
pub enum LiveopsError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Validation failed with {} error(s)", .0.len())]
    ValidationFailed(Vec<String>),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Internal fault raised while evaluating validation rules.
///
/// Faults never reach callers as `Err`; the public validators convert them
/// into a single `"System Error during validation: ..."` report entry so that
/// validation stays total.
#[derive(Debug, thiserror::Error)]
pub enum ValidationFault {
    #[error("skin catalog is empty")]
    EmptyCatalog,

    #[error("money SKU table is empty")]
    EmptySkuTable,
}

pub type Result<T> = std::result::Result<T, LiveopsError>;
