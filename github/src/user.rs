use super::NodeId;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub enum UserType {
    Bot,
    Organization,
    User,
}

/// A GitHub account as it appears in collaborator listings and as the invitee or inviter of a
/// repository invitation.
///
/// Only `login` and `id` are guaranteed; the remaining fields are kept when GitHub sends them.
#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub login: String,
    pub id: u64,
    pub node_id: Option<NodeId>,
    pub avatar_url: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<UserType>,
    #[serde(default)]
    pub site_admin: bool,
    /// Present on collaborator listings only
    pub permissions: Option<Permissions>,
    /// Present on collaborator listings only
    pub role_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub pull: bool,
    #[serde(default)]
    pub triage: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub maintain: bool,
    #[serde(default)]
    pub admin: bool,
}
