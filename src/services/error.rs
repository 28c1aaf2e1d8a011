use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("target url is empty")]
    EmptyUrl,
    #[error("target url is not a valid absolute url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request to upstream failed: {0}")]
    Request(reqwest::Error),
    #[error("upstream responded with {status} for {url}")]
    Status { status: StatusCode, url: String },
}

// The request url carries the proxy api key, so it never goes into the error.
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Request(e.without_url())
    }
}

impl FetchError {
    /// Upstream status, when the request got far enough to have one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Request(e) => e.status(),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("document has no element matching `{0}`")]
    MissingElement(&'static str),
}
