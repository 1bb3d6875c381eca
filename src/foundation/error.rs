use std::path::PathBuf;

pub type WardrobeResult<T> = Result<T, WardrobeError>;

#[derive(thiserror::Error, Debug)]
pub enum WardrobeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("scene error: {0}")]
    Scene(String),

    #[error("conversion failed for '{asset}': {message}")]
    Conversion { asset: String, message: String },

    /// No raster converter was available. Helper documents were written instead, but the run
    /// still counts as failed.
    #[error(
        "no raster converter available; wrote {} HTML helper document(s) instead of images",
        helpers.len()
    )]
    Degraded { helpers: Vec<PathBuf> },

    #[error("merge error: {0}")]
    Merge(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WardrobeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    pub fn conversion(asset: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Conversion {
            asset: asset.into(),
            message: msg.into(),
        }
    }

    pub fn merge(msg: impl Into<String>) -> Self {
        Self::Merge(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Labels an error with the catalog asset it was raised for, keeping its variant.
    /// Backends only know the output path; the batch driver knows the catalog entry.
    pub fn for_asset(self, asset: &str) -> Self {
        match self {
            Self::Conversion { message, .. } => Self::conversion(asset, message),
            Self::Validation(msg) => Self::Validation(format!("{asset}: {msg}")),
            Self::Scene(msg) => Self::Scene(format!("{asset}: {msg}")),
            Self::Merge(msg) => Self::Merge(format!("{asset}: {msg}")),
            Self::Serde(msg) => Self::Serde(format!("{asset}: {msg}")),
            Self::Other(e) => Self::Other(e.context(format!("asset '{asset}'"))),
            Self::Degraded { .. } => self,
        }
    }
}
