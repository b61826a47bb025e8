use super::RepositoryClient;
use crate::{
    client::{make_url, Result},
    RepositoryInvitation,
};
use reqwest::{Method, RequestBuilder};

// Implementation from the repository invitations endpoint
// https://docs.github.com/en/rest/collaborators/invitations
impl RepositoryClient<'_> {
    /// Build a request against the invitations collection, or against a single invitation when
    /// `member` is given.
    pub fn invitations_request(&self, member: Option<&str>, method: Method) -> RequestBuilder {
        self.request(&make_url(vec![Some("invitations"), member]), method)
    }

    /// List repository invitations which have not yet been accepted
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/collaborators/invitations#list-repository-invitations
    pub async fn list_invitations(&self) -> Result<Vec<RepositoryInvitation>> {
        let response = self.invitations_request(None, Method::GET).send().await?;

        self.inner.json(response).await
    }

    /// Delete a repository invitation
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/collaborators/invitations#delete-a-repository-invitation
    pub async fn delete_invitation(&self, invitation_id: u64) -> Result<()> {
        let id = invitation_id.to_string();
        let response = self
            .invitations_request(Some(&id), Method::DELETE)
            .send()
            .await?;

        self.inner.empty(response).await
    }
}
