/// A user with direct access to a repository
#[derive(Clone, Debug, PartialEq)]
pub struct Collaborator {
    pub id: u64,
    pub login: String,
}

/// A pending, not yet accepted, access grant
#[derive(Clone, Debug, PartialEq)]
pub struct Invitation {
    /// Handle used to cancel the invitation
    pub id: u64,
    pub login: String,
    /// Creation time formatted for display
    pub created_at: String,
    pub invite_link: String,
}
