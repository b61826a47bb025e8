use log::debug;
use reqwest::{header, Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::{fmt, time::Duration};
use url::Url;

mod error;
mod repos;

pub use error::{Error, Result};
pub use repos::{Permission, RepositoryClient};
pub use reqwest::StatusCode;

// Constants
const DEFAULT_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";

const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";

/// Join url path fragments with `/`, skipping fragments which are missing or empty.
///
/// This lets a single request helper target either a collection (`collaborators`) or one of its
/// members (`collaborators/octocat`).
pub fn make_url<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    fragments
        .into_iter()
        .flatten()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Username and personal access token used for HTTP basic authentication
#[derive(Clone)]
pub struct Credentials {
    username: String,
    token: String,
}

impl Credentials {
    pub fn new<U: Into<String>, T: Into<String>>(username: U, token: T) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            credentials: None,
            timeout: None,
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        // Reject garbage early rather than on the first request
        Url::parse(&base_url)?;
        let base_url = base_url.trim_end_matches('/').to_owned();

        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(MEDIA_TYPE_V3));

        let mut client_builder = ReqwestClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);

        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build()?;

        Ok(Client {
            base_url,
            credentials: self.credentials,
            client,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Client {
    /// Base URL to use for API requests. Defaults to the public GitHub API,
    /// but can be overridden for use with GitHub Enterprise. Stored without
    /// a trailing slash.
    base_url: String,

    /// Basic auth credentials attached to every request
    credentials: Option<Credentials>,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Scope requests to a single repository: `repos/{owner}/{repo}`
    pub fn repo<'a>(&'a self, owner: &'a str, repo: &'a str) -> RepositoryClient<'a> {
        RepositoryClient::new(self, owner, repo)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, url);
        debug!("Github Request: {} {}", method, url);

        let request = self.client.request(method, &url);
        match &self.credentials {
            Some(credentials) => request.basic_auth(&credentials.username, Some(&credentials.token)),
            None => request,
        }
    }

    // Check a response recieved from Github, turning any non-success status into an `Error`
    // describing what kind of failure occurred.
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        debug!("Github Response: {:#?}", response);

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let rate_limited = response
            .headers()
            .get(HEADER_RATE_REMAINING)
            .and_then(|h| h.to_str().ok())
            .map_or(false, |remaining| remaining.trim() == "0");

        let body = response.text().await?;
        let client_error = serde_json::from_str::<error::GithubClientError>(&body).ok();
        if let Some(url) = client_error
            .as_ref()
            .and_then(|e| e.documentation_url.as_ref())
        {
            debug!("Github documentation for this failure: {}", url);
        }

        Err(Error::from_status(
            status,
            rate_limited,
            client_error.and_then(|e| e.message),
        ))
    }

    // Process a response recieved from Github, deserializing the json payload.
    async fn json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = self.check_response(response).await?;
        let payload = response.text().await?;

        Ok(serde_json::from_str(&payload)?)
    }

    // Like `json` but a `204 No Content` or an empty body yields `None`.
    async fn optional_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Option<T>> {
        let response = self.check_response(response).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let payload = response.text().await?;
        if payload.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&payload)?))
    }

    async fn empty(&self, response: reqwest::Response) -> Result<()> {
        self.check_response(response).await?;
        Ok(())
    }
}
