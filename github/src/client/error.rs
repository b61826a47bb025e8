//! Error type for Github Client

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("unauthorized{}", detail(.0))]
    Unauthorized(Option<String>),

    #[error("forbidden{}", detail(.0))]
    Forbidden(Option<String>),

    #[error("not found{}", detail(.0))]
    NotFound(Option<String>),

    #[error("RateLimit")]
    RateLimit,

    #[error("server error `{}`{}", .0, detail(.1))]
    Server(StatusCode, Option<String>),

    #[error("request failed `{}`{}", .0, detail(.1))]
    GithubClientError(StatusCode, Option<String>),
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {}", message),
        None => String::new(),
    }
}

impl Error {
    /// Classify a non-success response from Github
    ///
    /// A 403 with an exhausted rate limit is reported as `RateLimit`, any other 403 as
    /// `Forbidden`.
    pub(crate) fn from_status(
        status: StatusCode,
        rate_limited: bool,
        message: Option<String>,
    ) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Error::Unauthorized(message),
            StatusCode::FORBIDDEN if rate_limited => Error::RateLimit,
            StatusCode::TOO_MANY_REQUESTS => Error::RateLimit,
            StatusCode::FORBIDDEN => Error::Forbidden(message),
            StatusCode::NOT_FOUND => Error::NotFound(message),
            status if status.is_server_error() => Error::Server(status, message),
            status => Error::GithubClientError(status, message),
        }
    }
}

// Github Error Responses
// https://developer.github.com/v3/#client-errors
#[derive(Debug, Deserialize)]
pub(crate) struct GithubClientError {
    pub(crate) message: Option<String>,
    pub(crate) documentation_url: Option<String>,
}

#[cfg(test)]
mod test {
    use super::{Error, GithubClientError};
    use reqwest::StatusCode;

    #[test]
    fn classify_status() {
        let message = || Some("Bad credentials".to_owned());

        assert!(matches!(
            Error::from_status(StatusCode::UNAUTHORIZED, false, message()),
            Error::Unauthorized(Some(_))
        ));
        assert!(matches!(
            Error::from_status(StatusCode::FORBIDDEN, true, message()),
            Error::RateLimit
        ));
        assert!(matches!(
            Error::from_status(StatusCode::FORBIDDEN, false, message()),
            Error::Forbidden(Some(_))
        ));
        assert!(matches!(
            Error::from_status(StatusCode::NOT_FOUND, false, None),
            Error::NotFound(None)
        ));
        assert!(matches!(
            Error::from_status(StatusCode::BAD_GATEWAY, false, None),
            Error::Server(StatusCode::BAD_GATEWAY, None)
        ));
        assert!(matches!(
            Error::from_status(StatusCode::UNPROCESSABLE_ENTITY, false, None),
            Error::GithubClientError(StatusCode::UNPROCESSABLE_ENTITY, None)
        ));
    }

    #[test]
    fn display_includes_message() {
        let err = Error::from_status(
            StatusCode::UNAUTHORIZED,
            false,
            Some("Bad credentials".to_owned()),
        );
        assert_eq!(err.to_string(), "unauthorized: Bad credentials");

        let err = Error::from_status(StatusCode::NOT_FOUND, false, None);
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn error_body() {
        let body = r#"{
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        }"#;

        let error: GithubClientError = serde_json::from_str(body).unwrap();
        assert_eq!(error.message.as_deref(), Some("Not Found"));
        assert!(error.documentation_url.is_some());
    }
}
