//! Table rendering for collaborators and invitations.
//!
//! Every presenter returns `None` for an empty input so that sections with nothing in them are
//! left out of the output entirely.

use crate::model::{Collaborator, Invitation};
use console::style;

const COLUMN_SEPARATOR: &str = "  ";

pub fn render_collaborators(collaborators: &[Collaborator]) -> Option<String> {
    if collaborators.is_empty() {
        return None;
    }

    let rows: Vec<Vec<String>> = collaborators
        .iter()
        .map(|c| vec![c.id.to_string(), c.login.clone()])
        .collect();

    Some(render_table(Some("Collaborators"), &["ID", "User"], &rows))
}

/// `show_title` controls the `Invitations` caption above the table.
pub fn render_invitations(invitations: &[Invitation], show_title: bool) -> Option<String> {
    if invitations.is_empty() {
        return None;
    }

    let rows: Vec<Vec<String>> = invitations
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                i.login.clone(),
                i.created_at.clone(),
                i.invite_link.clone(),
            ]
        })
        .collect();

    let title = if show_title { Some("Invitations") } else { None };
    Some(render_table(
        title,
        &["ID", "User", "Creation Date", "Invite Link"],
        &rows,
    ))
}

fn render_table(title: Option<&str>, headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 3);

    if let Some(title) = title {
        lines.push(style(title).bold().underlined().to_string());
    }

    // Padding is applied before styling so escape codes don't skew the alignment
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    lines.push(
        pad_row(&header_cells, &widths)
            .into_iter()
            .map(|cell| style(cell).bold().to_string())
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR),
    );

    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR),
    );

    for row in rows {
        lines.push(pad_row(row, &widths).join(COLUMN_SEPARATOR));
    }

    lines.join("\n")
}

// The last column is left unpadded to avoid trailing whitespace
fn pad_row(cells: &[String], widths: &[usize]) -> Vec<String> {
    let last = widths.len().saturating_sub(1);
    widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let cell = cells.get(index).map(String::as_str).unwrap_or("");
            if index == last {
                cell.to_owned()
            } else {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::{render_collaborators, render_invitations};
    use crate::model::{Collaborator, Invitation};

    fn invitation() -> Invitation {
        Invitation {
            id: 9,
            login: "bob".to_owned(),
            created_at: "1/1/2024, 12:00:00 AM".to_owned(),
            invite_link: "https://github.com/octocat/hello/invitations".to_owned(),
        }
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_collaborators(&[]), None);
        assert_eq!(render_invitations(&[], true), None);
        assert_eq!(render_invitations(&[], false), None);
    }

    #[test]
    fn collaborators_table() {
        console::set_colors_enabled(false);

        let collaborators = vec![
            Collaborator {
                id: 1,
                login: "alice".to_owned(),
            },
            Collaborator {
                id: 1234,
                login: "bob".to_owned(),
            },
        ];

        let table = render_collaborators(&collaborators).unwrap();
        let expected = "\
Collaborators
ID    User
----  -----
1     alice
1234  bob";
        assert_eq!(table, expected);
    }

    #[test]
    fn invitations_table() {
        console::set_colors_enabled(false);

        let table = render_invitations(&[invitation()], true).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Invitations");
        assert_eq!(
            lines[1],
            "ID  User  Creation Date          Invite Link"
        );
        assert_eq!(
            lines[3],
            "9   bob   1/1/2024, 12:00:00 AM  https://github.com/octocat/hello/invitations"
        );
    }

    #[test]
    fn invitations_table_without_title() {
        console::set_colors_enabled(false);

        let table = render_invitations(&[invitation()], false).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        // header, divider and a single row
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("bob"));
    }
}
