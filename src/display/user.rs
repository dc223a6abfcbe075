//! User display formatting

use crate::models::User;

/// Format a table of users. Password hashes are never shown.
pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let username_width = users
        .iter()
        .map(|u| u.username.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<9}  {}\n",
        "Username",
        "Role",
        "Full name",
        width = username_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:-<9}  {:-<20}\n",
        "",
        "",
        "",
        width = username_width
    ));

    for user in users {
        output.push_str(&format!(
            "{:<width$}  {:<9}  {}\n",
            user.username,
            user.role.to_string(),
            user.full_name,
            width = username_width
        ));
    }

    output
}
