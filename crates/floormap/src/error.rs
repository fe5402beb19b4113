pub type Result<T> = std::result::Result<T, Error>;

/// Component-level failures.
///
/// `WarehouseMap` never returns these from its entry points; failures stay
/// presentational (an in-surface annotation plus a log line) and the most
/// recent one is exposed via [`crate::map::WarehouseMap::last_error`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("warehouse map rendering surface not found")]
    SurfaceMissing,

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Failures while fetching or decoding the product-location list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("product request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("product endpoint returned status {0}")]
    Status(u16),

    #[error("invalid product payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read product file: {0}")]
    Io(#[from] std::io::Error),
}
