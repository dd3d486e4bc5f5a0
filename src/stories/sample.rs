//! Sample users and the column sets shown by the demo page and the stories.

use chrono::NaiveDate;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::table::{display_string, CellValue, Column, Record};
use crate::ui::components::{Badge, BadgeVariant};
use crate::ui::theme::theme;

/// Account status of a sample user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, UserStatus::Active)
    }
}

/// A user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    /// Account creation date; the demo data uses it as last login.
    pub created_at: NaiveDate,
}

impl SampleUser {
    fn new(
        id: i64,
        name: &str,
        email: &str,
        role: &str,
        status: UserStatus,
        (y, m, d): (i32, u32, u32),
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status,
            created_at: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        }
    }
}

impl Record for SampleUser {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "createdAt" | "lastLogin" => Some(self.created_at.into()),
            _ => None,
        }
    }
}

/// The users listed in the stories.
pub fn sample_users() -> Vec<SampleUser> {
    use UserStatus::*;
    vec![
        SampleUser::new(1, "John Doe", "john.doe@example.com", "Admin", Active, (2024, 1, 15)),
        SampleUser::new(2, "Jane Smith", "jane.smith@example.com", "User", Active, (2024, 1, 16)),
        SampleUser::new(
            3,
            "Bob Johnson",
            "bob.johnson@example.com",
            "Editor",
            Inactive,
            (2024, 1, 17),
        ),
        SampleUser::new(4, "Alice Brown", "alice.brown@example.com", "User", Active, (2024, 1, 18)),
    ]
}

/// The users listed on the demo page.
pub fn demo_users() -> Vec<SampleUser> {
    use UserStatus::*;
    vec![
        SampleUser::new(1, "John Doe", "john.doe@example.com", "Admin", Active, (2024, 1, 15)),
        SampleUser::new(2, "Jane Smith", "jane.smith@example.com", "User", Active, (2024, 1, 14)),
        SampleUser::new(
            3,
            "Bob Johnson",
            "bob.johnson@example.com",
            "Manager",
            Inactive,
            (2024, 1, 10),
        ),
        SampleUser::new(
            4,
            "Alice Wilson",
            "alice.wilson@example.com",
            "User",
            Active,
            (2024, 1, 16),
        ),
    ]
}

fn status_pill(value: Option<&CellValue>, _: &SampleUser, _: usize) -> Line<'static> {
    let t = theme();
    let text = value.map(|v| v.to_string()).unwrap_or_default();
    let color = if text == "active" { t.success } else { t.error };
    Line::from(Span::styled(text, Style::default().fg(color)))
}

/// Name, email and role (sortable) plus a coloured status.
pub fn basic_columns() -> Vec<Column<SampleUser>> {
    vec![
        Column::new("name", "Name").sortable(true),
        Column::new("email", "Email").sortable(true),
        Column::new("role", "Role").sortable(true),
        Column::new("status", "Status").render_with(status_pill),
    ]
}

/// The basic columns plus a formatted creation date and row actions.
pub fn advanced_columns() -> Vec<Column<SampleUser>> {
    let mut columns = basic_columns();
    columns.push(
        Column::new("createdAt", "Created")
            .sortable(true)
            .render_with(|value, _, _| {
                let text = value
                    .and_then(CellValue::as_date)
                    .map(|date| date.format("%b %-d, %Y").to_string())
                    .unwrap_or_default();
                Line::from(text)
            }),
    );
    columns.push(
        Column::new("actions", "Actions")
            .field("id")
            .align(Alignment::Right)
            .width(14)
            .render_with(|_, _, _| {
                let t = theme();
                Line::from(vec![
                    Span::styled("Edit", Style::default().fg(t.accent)),
                    Span::raw(" "),
                    Span::styled("Delete", Style::default().fg(t.destructive)),
                ])
            }),
    );
    columns
}

/// Initial avatar with name and email, a role pill and a status dot.
pub fn custom_rendering_columns() -> Vec<Column<SampleUser>> {
    vec![
        Column::new("user", "User")
            .field("name")
            .render_with(|value, user: &SampleUser, _| {
                let t = theme();
                let name = value.map(|v| v.to_string()).unwrap_or_default();
                let initial = name.chars().next().unwrap_or(' ');
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", initial),
                        Style::default()
                            .fg(t.accent_fg)
                            .bg(t.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!(" {}", user.email), Style::default().fg(t.muted)),
                ])
            }),
        Column::new("role", "Role").render_with(|value, _, _| {
            let role = value.map(|v| v.to_string()).unwrap_or_default();
            Line::from(Badge::new(role).variant(BadgeVariant::Secondary).to_span())
        }),
        Column::new("status", "Status").render_with(|value, _, _| {
            let t = theme();
            let status = value.map(|v| v.to_string()).unwrap_or_default();
            let color = if status == "active" { t.success } else { t.error };
            Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::raw(capitalize(&status)),
            ])
        }),
    ]
}

/// Demo page rows as JSON objects, the shape `--data` files use.
pub fn demo_records() -> Vec<Value> {
    demo_users()
        .into_iter()
        .map(|user| {
            json!({
                "id": user.id,
                "name": user.name,
                "email": user.email,
                "role": user.role,
                "status": user.status.as_str(),
                "lastLogin": user.created_at.format("%Y-%m-%d").to_string(),
            })
        })
        .collect()
}

/// Columns of the demo page table, with badges for role and status.
pub fn demo_columns<T: Record + 'static>() -> Vec<Column<T>> {
    vec![
        Column::new("name", "Name").sortable(true),
        Column::new("email", "Email").sortable(true),
        Column::new("role", "Role")
            .sortable(true)
            .render_with(|value, _, _| {
                let role = display_string(value);
                let variant = if role == "Admin" {
                    BadgeVariant::Default
                } else {
                    BadgeVariant::Secondary
                };
                Line::from(Badge::new(role).variant(variant).to_span())
            }),
        Column::new("status", "Status")
            .sortable(true)
            .render_with(|value, _, _| {
                let status = display_string(value);
                let variant = if status == "active" {
                    BadgeVariant::Default
                } else {
                    BadgeVariant::Destructive
                };
                Line::from(Badge::new(status).variant(variant).to_span())
            }),
        Column::new("lastLogin", "Last Login").sortable(true),
    ]
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{compute_display_order, SortState};

    #[test]
    fn test_record_projection() {
        let user = &sample_users()[0];
        assert_eq!(user.field("id"), Some(CellValue::Int(1)));
        assert_eq!(user.field("role"), Some(CellValue::from("Admin")));
        assert_eq!(
            user.field("createdAt").and_then(|v| v.as_date()),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(user.field("avatar"), None);
    }

    #[test]
    fn test_sort_by_last_login() {
        let users = demo_users();
        let columns = demo_columns::<SampleUser>();
        let order = compute_display_order(&users, &columns, &SortState::ascending("lastLogin"));
        let ids: Vec<i64> = order.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_demo_records_sort_like_users() {
        let records = demo_records();
        assert_eq!(records[0]["lastLogin"], "2024-01-15");

        let columns = demo_columns::<Value>();
        let order = compute_display_order(&records, &columns, &SortState::descending("lastLogin"));
        let names: Vec<&str> = order.iter().filter_map(|r| r["name"].as_str()).collect();
        assert_eq!(names, vec!["Alice Wilson", "John Doe", "Jane Smith", "Bob Johnson"]);

        let status = columns.iter().find(|c| c.key() == "status").unwrap();
        assert_eq!(status.cell(&records[2], 2).to_string(), " inactive ");
    }

    #[test]
    fn test_advanced_columns_render() {
        let users = sample_users();
        let columns = advanced_columns();
        let created = columns.iter().find(|c| c.key() == "createdAt").unwrap();
        assert_eq!(created.cell(&users[0], 0).to_string(), "Jan 15, 2024");

        let actions = columns.iter().find(|c| c.key() == "actions").unwrap();
        assert_eq!(actions.cell(&users[0], 0).to_string(), "Edit Delete");
        assert!(!actions.is_sortable());
    }

    #[test]
    fn test_custom_rendering_uses_whole_record() {
        let users = sample_users();
        let columns = custom_rendering_columns();
        let line = columns[0].cell(&users[1], 1).to_string();
        assert!(line.starts_with(" J "));
        assert!(line.contains("Jane Smith"));
        assert!(line.contains("jane.smith@example.com"));

        assert_eq!(columns[2].cell(&users[2], 2).to_string(), "● Inactive");
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let json = serde_json::to_value(&sample_users()[0]).unwrap();
        assert_eq!(json["createdAt"], "2024-01-15");
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("active"), "Active");
        assert_eq!(capitalize(""), "");
    }
}
