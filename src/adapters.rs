//! Projections from Github's wire types onto the display model.

use crate::model::{Collaborator, Invitation};
use chrono::{Local, TimeZone};
use github::{DateTime, RepositoryInvitation, User};
use std::fmt;

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub fn adapt_collaborator(user: &User) -> Collaborator {
    Collaborator {
        id: user.id,
        login: user.login.clone(),
    }
}

pub fn adapt_invitation(invitation: &RepositoryInvitation) -> Invitation {
    Invitation {
        id: invitation.id,
        login: invitation.invitee.login.clone(),
        created_at: format_timestamp(&invitation.created_at, &Local),
        invite_link: invitation.html_url.clone(),
    }
}

/// Render a timestamp in the given time zone, e.g. `1/1/2024, 12:00:00 AM`
pub fn format_timestamp<Tz>(datetime: &DateTime, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    datetime
        .as_chrono()
        .with_timezone(tz)
        .format(DISPLAY_FORMAT)
        .to_string()
}

#[cfg(test)]
mod test {
    use super::{adapt_collaborator, adapt_invitation, format_timestamp};
    use chrono::{FixedOffset, Utc};
    use github::{DateTime, RepositoryInvitation, User};

    #[test]
    fn collaborator_drops_extra_fields() {
        let user: User = serde_json::from_str(
            r#"{ "login": "alice", "id": 1, "site_admin": true, "role_name": "admin" }"#,
        )
        .unwrap();

        let collaborator = adapt_collaborator(&user);
        assert_eq!(collaborator.id, 1);
        assert_eq!(collaborator.login, "alice");
    }

    #[test]
    fn invitation() {
        let raw: RepositoryInvitation = serde_json::from_str(
            r#"{
                "id": 9,
                "invitee": { "login": "bob", "id": 2 },
                "created_at": "2024-01-01T00:00:00Z",
                "html_url": "https://github.com/octocat/hello/invitations/9"
            }"#,
        )
        .unwrap();

        let invitation = adapt_invitation(&raw);
        assert_eq!(invitation.id, 9);
        assert_eq!(invitation.login, "bob");
        assert_eq!(
            invitation.invite_link,
            "https://github.com/octocat/hello/invitations/9"
        );
        assert_eq!(
            invitation.created_at,
            format_timestamp(&raw.created_at, &chrono::Local)
        );
    }

    #[test]
    fn timestamp_format() {
        let datetime: DateTime = serde_json::from_str(r#""2024-01-01T00:00:00Z""#).unwrap();
        assert_eq!(format_timestamp(&datetime, &Utc), "1/1/2024, 12:00:00 AM");

        let afternoon: DateTime = serde_json::from_str(r#""2016-06-13T19:52:50Z""#).unwrap();
        let central = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            format_timestamp(&afternoon, &central),
            "6/13/2016, 2:52:50 PM"
        );
    }
}
