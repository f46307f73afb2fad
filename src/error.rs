//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum HelperError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Page error: {0}")]
    Page(#[from] PageError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    /// The endpoint answered 2xx but flagged `success: false`.
    #[error("Failed to get key prices: {message}")]
    ApiFailure { message: String },

    #[error("Unauthorized")]
    Unauthorized,
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The page-level session object carries no anti-forgery token.
    /// Usually means the user is not logged in.
    #[error("Your csrf code is null, please check if you're logged in")]
    MissingCsrf,
}

/// Host-page extraction errors.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("No sales chart state found on the page")]
    ChartMissing,

    #[error("Chart series not found: {0}")]
    SeriesMissing(&'static str),
}
