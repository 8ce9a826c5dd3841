use thiserror::Error;

/// Page text returned by a [`crate::Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub text: String,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub encoding_label: String,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fetch failed ({kind}): {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Why a page could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("redirect limit exceeded")]
    RedirectLimitExceeded,
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("unsupported content type {content_type}")]
    UnsupportedContentType { content_type: String },
    #[error("network error")]
    Network,
}

/// An element the strict extraction path relies on is not in the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralParseError {
    #[error("expected element `{selector}` not found")]
    MissingElement { selector: String },
    #[error("element `{selector}` has no `{attribute}` attribute")]
    MissingAttribute { selector: String, attribute: String },
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("no JSON-LD object with a `name` found")]
    MissingJsonLd,
    #[error("url `{0}` does not carry the expected path")]
    MalformedUrl(String),
}

/// A raw keyword has no entry in a normalization table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown platform `{0}`")]
    UnknownPlatform(String),
    #[error("unknown language `{0}`")]
    UnknownLanguage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("hook `{hook}` failed: {message}")]
pub struct HookError {
    pub hook: String,
    pub message: String,
}

impl HookError {
    pub fn new(hook: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hook: hook.into(),
            message: message.into(),
        }
    }
}

/// Every way a single-page run can fail. Nothing is retried.
#[derive(Debug, Error)]
pub enum SpiderError {
    #[error("no extractor accepts url `{0}`")]
    UnsupportedUrl(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Structure(#[from] StructuralParseError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Hook(#[from] HookError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("yaml serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
