use super::{DateTime, NodeId, User};
use serde::Deserialize;

/// A pending invitation for a user to collaborate on a repository
///
/// GitHub API docs: https://docs.github.com/en/rest/collaborators/invitations
#[derive(Clone, Debug, Deserialize)]
pub struct RepositoryInvitation {
    pub id: u64,
    pub node_id: Option<NodeId>,
    pub repository: Option<InvitationRepository>,
    pub invitee: User,
    pub inviter: Option<User>,
    /// The permission granted once the invitation is accepted: read, triage, write, maintain or admin
    pub permissions: Option<String>,
    pub created_at: DateTime,
    #[serde(default)]
    pub expired: bool,
    pub url: Option<String>,
    pub html_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct InvitationRepository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: Option<String>,
    #[serde(default)]
    pub private: bool,
}
