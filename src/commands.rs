//! The four collaborator management commands.
//!
//! Each command performs its remote calls in sequence and either returns a `Report` of what to
//! show the user or the first error encountered. Nothing is printed here.

use crate::{
    adapters::{adapt_collaborator, adapt_invitation},
    api::RepoAccess,
    presenters::{render_collaborators, render_invitations},
    Error, Result,
};
use console::style;
use github::client::Permission;
use log::info;
use std::fmt;

/// Output blocks produced by a command, in display order
#[derive(Debug, Default)]
pub struct Report {
    blocks: Vec<String>,
}

impl Report {
    fn push<S: Into<String>>(&mut self, block: S) {
        self.blocks.push(block.into());
    }

    fn push_opt(&mut self, block: Option<String>) {
        if let Some(block) = block {
            self.push(block);
        }
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.blocks.join("\n\n"))
    }
}

/// Show the collaborators of `repo` followed by its pending invitations
pub async fn list<A: RepoAccess + ?Sized>(api: &A, repo: &str) -> Result<Report> {
    let collaborators: Vec<_> = api
        .list_collaborators(repo)
        .await?
        .iter()
        .map(adapt_collaborator)
        .collect();

    let invitations: Vec<_> = api
        .list_invitations(repo)
        .await?
        .iter()
        .map(adapt_invitation)
        .collect();

    info!(
        "{}: {} collaborators, {} pending invitations",
        repo,
        collaborators.len(),
        invitations.len()
    );

    let mut report = Report::default();
    report.push_opt(render_collaborators(&collaborators));
    report.push_opt(render_invitations(&invitations, true));
    Ok(report)
}

/// Invite `collaborator` to `repo`.
///
/// Inviting someone who already has access succeeds without creating an invitation.
pub async fn add<A: RepoAccess + ?Sized>(
    api: &A,
    collaborator: &str,
    repo: &str,
    permission: Option<Permission>,
) -> Result<Report> {
    let mut report = Report::default();

    match api.add_collaborator(repo, collaborator, permission).await? {
        Some(invitation) => {
            let invitation = adapt_invitation(&invitation);
            info!("invited {} to {} ({})", collaborator, repo, invitation.id);

            report.push(format!(
                "{} {}",
                style("Invitation sent to =>").green(),
                style(collaborator).green().bold().underlined()
            ));
            report.push_opt(render_invitations(&[invitation], false));
        }
        None => {
            info!("{} already has access to {}", collaborator, repo);

            report.push(format!(
                "{} {} {}",
                style(collaborator).green().bold().underlined(),
                style("is already a collaborator on").green(),
                style(repo).green().bold()
            ));
        }
    }

    Ok(report)
}

/// Revoke `collaborator`'s access to `repo`
pub async fn remove<A: RepoAccess + ?Sized>(
    api: &A,
    collaborator: &str,
    repo: &str,
) -> Result<Report> {
    api.remove_collaborator(repo, collaborator).await?;
    info!("removed {} from {}", collaborator, repo);

    let mut report = Report::default();
    report.push(format!(
        "{} {} {} {}",
        style("Removed").green(),
        style(collaborator).green().bold().underlined(),
        style("from").green(),
        style(repo).green().bold()
    ));
    Ok(report)
}

/// Cancel the pending invitation addressed to `collaborator`.
///
/// The login is matched exactly against the invitee of each pending invitation and the first
/// match is deleted.
pub async fn cancel<A: RepoAccess + ?Sized>(
    api: &A,
    collaborator: &str,
    repo: &str,
) -> Result<Report> {
    let invitation = api
        .list_invitations(repo)
        .await?
        .iter()
        .map(adapt_invitation)
        .find(|invitation| invitation.login == collaborator)
        .ok_or_else(|| Error::NoPendingInvitation {
            login: collaborator.to_owned(),
            repo: repo.to_owned(),
        })?;

    api.delete_invitation(repo, invitation.id).await?;
    info!(
        "cancelled invitation {} for {} on {}",
        invitation.id, collaborator, repo
    );

    let mut report = Report::default();
    report.push(format!(
        "{} {}{}",
        style("Cancelled").green(),
        style(collaborator).green().bold().underlined(),
        style("'s invitation").green()
    ));
    Ok(report)
}
