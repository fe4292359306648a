use crate::model::User;
use crate::ui::badge::active_badge;
use crate::ui::detail::DetailState;
use crate::ui::menu::MenuItem;
use crate::ui::table::{Column, TableCell, TableRow};

use super::{RowAction, opt_date, opt_str};

pub const COLUMNS: &[Column] = &[
    Column {
        title: "Name",
        width: 20,
        sort_key: Some("name"),
    },
    Column {
        title: "Email",
        width: 26,
        sort_key: Some("email"),
    },
    Column {
        title: "Role",
        width: 12,
        sort_key: Some("role"),
    },
    Column {
        title: "Active",
        width: 10,
        sort_key: None,
    },
    Column {
        title: "Last login",
        width: 17,
        sort_key: Some("last_login"),
    },
];

pub fn row(user: &User) -> TableRow {
    let badge = active_badge(user.is_active);
    TableRow {
        id: user.id.clone(),
        cells: vec![
            TableCell::plain(opt_str(user.name.as_deref())),
            TableCell::plain(opt_str(user.email.as_deref())),
            TableCell::plain(opt_str(user.role.as_deref())),
            TableCell::styled(badge.label, badge.style()),
            TableCell::plain(opt_date(user.last_login)),
        ],
    }
}

pub fn actions(user: &User) -> Vec<MenuItem<RowAction>> {
    let toggle_label = if user.is_active {
        "Deactivate"
    } else {
        "Activate"
    };
    vec![
        MenuItem::new("View details", RowAction::ViewDetails),
        MenuItem::new(toggle_label, RowAction::ToggleActive),
        MenuItem::new("Delete", RowAction::Delete).enabled(user.deletable()),
    ]
}

pub fn detail(user: &User) -> DetailState {
    DetailState {
        title: format!("User {}", opt_str(user.email.as_deref())),
        fields: vec![
            ("ID", user.id.clone()),
            ("Name", opt_str(user.name.as_deref())),
            ("Email", opt_str(user.email.as_deref())),
            ("Role", opt_str(user.role.as_deref())),
            ("Active", active_badge(user.is_active).label.to_string()),
            ("Last login", opt_date(user.last_login)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_user_cannot_be_deleted() {
        let user: User = serde_json::from_str(r#"{"id": "u-1", "is_active": true}"#).unwrap();
        let delete = actions(&user)
            .into_iter()
            .find(|item| item.action == RowAction::Delete)
            .unwrap();
        assert!(!delete.enabled);
    }

    #[test]
    fn test_toggle_label_tracks_state() {
        let user: User = serde_json::from_str(r#"{"id": "u-1", "is_active": true}"#).unwrap();
        assert!(actions(&user).iter().any(|i| i.label == "Deactivate"));

        let user: User = serde_json::from_str(r#"{"id": "u-2"}"#).unwrap();
        assert!(actions(&user).iter().any(|i| i.label == "Activate"));
    }
}
