#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::HttpClientBuild(value.to_string())
    }
}
