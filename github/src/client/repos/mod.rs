use crate::client::{make_url, Client};
use reqwest::{Method, RequestBuilder};

mod collaborators;
mod invitations;

pub use collaborators::Permission;

/// `RepositoryClient` handles communication with the Repository related methods of the GitHub API
/// for a single `owner/repo` pair.
///
/// GitHub API docs: https://docs.github.com/en/rest/repos
pub struct RepositoryClient<'a> {
    inner: &'a Client,
    owner: &'a str,
    repo: &'a str,
}

impl<'a> RepositoryClient<'a> {
    pub(in crate::client) fn new(client: &'a Client, owner: &'a str, repo: &'a str) -> Self {
        Self {
            inner: client,
            owner,
            repo,
        }
    }

    /// Build a request for `repos/{owner}/{repo}/{subpath}`
    pub fn request(&self, subpath: &str, method: Method) -> RequestBuilder {
        let url = make_url(vec![
            Some("repos"),
            Some(self.owner),
            Some(self.repo),
            Some(subpath),
        ]);
        self.inner.request(method, &url)
    }
}
