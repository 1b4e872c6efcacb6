/// Failures that end a sync run.
///
/// HTTP helpers return these directly. Services wrap them in a
/// `color_eyre::Report`, so callers that need the category can
/// `downcast_ref::<SyncError>()`.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Missing required configuration: {}", .missing.join(", "))]
    Config { missing: Vec<&'static str> },

    #[error("Request to {endpoint} failed: {source}")]
    Upstream {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}

impl SyncError {
    pub fn upstream(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Upstream {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }
}
