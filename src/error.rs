use std::{borrow::Cow, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(Cow<'static, str>),

    #[error("unable to read settings file `{}`: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error(transparent)]
    Github(#[from] github::client::Error),

    #[error("no pending invitation for `{login}` on `{repo}`")]
    NoPendingInvitation { login: String, repo: String },
}

impl Error {
    /// Process exit code reported for this kind of failure
    pub fn exit_code(&self) -> i32 {
        use github::client::Error as GithubError;

        match self {
            Error::Config(_) | Error::Settings { .. } | Error::Github(GithubError::Url(_)) => 2,
            Error::Github(GithubError::Unauthorized(_)) => 3,
            Error::Github(GithubError::Forbidden(_)) => 4,
            Error::Github(GithubError::NotFound(_)) | Error::NoPendingInvitation { .. } => 5,
            Error::Github(GithubError::RateLimit) => 6,
            Error::Github(GithubError::Server(..)) => 7,
            Error::Github(GithubError::MalformedResponse(_)) => 8,
            Error::Github(_) => 1,
        }
    }
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Config(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Config(error.into())
    }
}
