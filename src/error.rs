use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    #[error("invalid API response: {0}")]
    Api(String),

    #[error("API response has no `{0}` field")]
    MissingField(&'static str),
}

impl FetchError {
    /// The source answered but carried no problem; callers report "no result".
    pub fn is_absent(&self) -> bool {
        matches!(self, FetchError::MissingField(_))
    }
}
