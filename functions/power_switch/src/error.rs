use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowerError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Failed to start instance: {0}")]
    StartError(String),

    #[error("Failed to stop instance: {0}")]
    StopError(String),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Response build error: {0}")]
    ResponseError(#[from] lambda_http::http::Error),
}

pub type Result<T> = std::result::Result<T, PowerError>;
