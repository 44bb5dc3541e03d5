//! Plain-text rendering of the lookup screen.

use crate::lookup::UserRecord;
use crate::ui::lookup::LookupState;

const NO_NAME: &str = "No name";

/// Render `state` as the text the CLI prints.
///
/// Loading wins over everything else; an idle state renders empty.
pub fn render_lookup(state: &LookupState) -> String {
    if state.is_idle() {
        return String::new();
    }
    if state.is_loading {
        return "Loading...".to_string();
    }
    if let Some(error) = &state.error_text {
        return format!("Error: {}", error);
    }
    match &state.result {
        Some(user) => render_profile(user),
        None => String::new(),
    }
}

/// Profile card: name, handle, bio, avatar and counters.
pub fn render_profile(user: &UserRecord) -> String {
    let mut lines = vec![
        user.name.as_deref().unwrap_or(NO_NAME).to_string(),
        format!("@{}", user.login),
    ];

    if let Some(bio) = user.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        lines.push(String::new());
        lines.push(bio.to_string());
    }

    lines.push(String::new());
    if !user.avatar_url.is_empty() {
        lines.push(format!("Avatar:    {}", user.avatar_url));
    }
    lines.push(format!("Repos:     {}", user.public_repos));
    lines.push(format!("Followers: {}", user.followers));

    lines.join("\n")
}
