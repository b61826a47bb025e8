use super::RepositoryClient;
use crate::{
    client::{make_url, Result},
    RepositoryInvitation, User,
};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// The permission to grant a collaborator on a repository
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Pull => "pull",
            Permission::Triage => "triage",
            Permission::Push => "push",
            Permission::Maintain => "maintain",
            Permission::Admin => "admin",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pull" => Ok(Permission::Pull),
            "triage" => Ok(Permission::Triage),
            "push" => Ok(Permission::Push),
            "maintain" => Ok(Permission::Maintain),
            "admin" => Ok(Permission::Admin),
            _ => Err(format!(
                "unknown permission `{}`, expected one of: pull, triage, push, maintain, admin",
                s
            )),
        }
    }
}

// Implementation from the collaborators endpoint
// https://docs.github.com/en/rest/collaborators/collaborators
impl RepositoryClient<'_> {
    /// Build a request against the collaborators collection, or against a single collaborator
    /// when `member` is given.
    pub fn collaborators_request(&self, member: Option<&str>, method: Method) -> RequestBuilder {
        self.request(&make_url(vec![Some("collaborators"), member]), method)
    }

    /// List Collaborators
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/collaborators/collaborators#list-repository-collaborators
    pub async fn list_collaborators(&self) -> Result<Vec<User>> {
        let response = self
            .collaborators_request(None, Method::GET)
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// Add a user as a collaborator
    ///
    /// Github answers with the newly created invitation, or with no content at all when the user
    /// already has access to the repository.
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/collaborators/collaborators#add-a-repository-collaborator
    pub async fn add_collaborator(
        &self,
        user: &str,
        permission: Option<Permission>,
    ) -> Result<Option<RepositoryInvitation>> {
        #[derive(Debug, Serialize)]
        struct AddCollaboratorRequest {
            #[serde(skip_serializing_if = "Option::is_none")]
            permission: Option<Permission>,
        }

        let request = AddCollaboratorRequest { permission };
        let response = self
            .collaborators_request(Some(user), Method::PUT)
            .json(&request)
            .send()
            .await?;

        self.inner.optional_json(response).await
    }

    /// Remove a collaborator
    ///
    /// GitHub API docs: https://docs.github.com/en/rest/collaborators/collaborators#remove-a-repository-collaborator
    pub async fn remove_collaborator(&self, user: &str) -> Result<()> {
        let response = self
            .collaborators_request(Some(user), Method::DELETE)
            .send()
            .await?;

        self.inner.empty(response).await
    }
}
