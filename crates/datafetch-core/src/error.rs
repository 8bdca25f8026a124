use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("did not agree to the license for {0}")]
    LicenseDeclined(String),

    #[error("missing {name} executable")]
    MissingExecutable { name: String, hint: String },

    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("invalid '{kind}' action: {reason}")]
    InvalidAction { kind: String, reason: String },

    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: String },

    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, FetchError>;
