use crate::{Config, Result};
use async_trait::async_trait;
use github::{
    client::{Credentials, Permission, Result as GithubResult},
    Client, RepositoryInvitation, User,
};

/// The remote operations the commands need, scoped to repositories owned by one user.
#[async_trait]
pub trait RepoAccess: Send + Sync {
    async fn list_collaborators(&self, repo: &str) -> GithubResult<Vec<User>>;

    async fn list_invitations(&self, repo: &str) -> GithubResult<Vec<RepositoryInvitation>>;

    /// `None` when `login` already has access and no invitation was created
    async fn add_collaborator(
        &self,
        repo: &str,
        login: &str,
        permission: Option<Permission>,
    ) -> GithubResult<Option<RepositoryInvitation>>;

    async fn remove_collaborator(&self, repo: &str, login: &str) -> GithubResult<()>;

    async fn delete_invitation(&self, repo: &str, invitation_id: u64) -> GithubResult<()>;
}

/// `RepoAccess` backed by the GitHub REST API
#[derive(Debug)]
pub struct GithubAccess {
    client: Client,
    owner: String,
}

impl GithubAccess {
    pub fn new(client: Client, owner: String) -> Self {
        Self { client, owner }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .credentials(Credentials::new(config.user(), config.access_token()))
            .timeout(config.timeout());

        if let Some(base_url) = config.base_url() {
            builder = builder.base_url(base_url);
        }

        Ok(Self::new(builder.build()?, config.user().to_owned()))
    }
}

#[async_trait]
impl RepoAccess for GithubAccess {
    async fn list_collaborators(&self, repo: &str) -> GithubResult<Vec<User>> {
        self.client.repo(&self.owner, repo).list_collaborators().await
    }

    async fn list_invitations(&self, repo: &str) -> GithubResult<Vec<RepositoryInvitation>> {
        self.client.repo(&self.owner, repo).list_invitations().await
    }

    async fn add_collaborator(
        &self,
        repo: &str,
        login: &str,
        permission: Option<Permission>,
    ) -> GithubResult<Option<RepositoryInvitation>> {
        self.client
            .repo(&self.owner, repo)
            .add_collaborator(login, permission)
            .await
    }

    async fn remove_collaborator(&self, repo: &str, login: &str) -> GithubResult<()> {
        self.client
            .repo(&self.owner, repo)
            .remove_collaborator(login)
            .await
    }

    async fn delete_invitation(&self, repo: &str, invitation_id: u64) -> GithubResult<()> {
        self.client
            .repo(&self.owner, repo)
            .delete_invitation(invitation_id)
            .await
    }
}
