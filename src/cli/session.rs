// Session commands: store, clear and inspect the logged-in user

use std::path::Path;

use crate::app_data::AppData;
use crate::errors::AppError;
use crate::stores::AppStore;
use crate::types::{SessionUser, ViewPermission};

/// Persist a user document obtained from the backend's login endpoint
///
/// The document is trusted as-is; authentication already happened server side.
pub async fn login_from_file(app_data: &mut AppData, file: &Path) -> Result<(), AppError> {
    let contents = std::fs::read_to_string(file).map_err(|e| AppError::Io {
        path: file.display().to_string(),
        source: e,
    })?;
    let user = parse_user(&contents)?;
    let name = user.display_name();

    app_data.login(user).await?;

    println!("✓ Logged in as {}", name);
    Ok(())
}

pub async fn logout(app_data: &mut AppData) -> Result<(), AppError> {
    if !app_data.store.is_authenticated() {
        println!("ℹ️  No session to log out of.");
        return Ok(());
    }

    app_data.logout().await?;
    println!("✓ Logged out");
    Ok(())
}

pub fn show(store: &AppStore) {
    let Some(user) = store.login_user_info() else {
        println!("Not logged in.");
        return;
    };

    println!("User: {}", user.display_name());
    if let Some(email) = &user.email {
        println!("  Email:         {}", email);
    }
    if let Some(role_id) = store.user_role_id() {
        println!("  User role:     {}", role_id);
    }
    println!("  Admin:         {}", store.is_admin());
    println!("  Manager:       {}", store.is_manager());
    println!("  Worker:        {}", store.is_worker());
    println!("  Role assigned: {}", store.is_role_assigned());
    println!("  Developer:     {}", store.is_dev());
    println!("  Token:         {}", if store.auth_token().is_some() { "present" } else { "none" });

    let views: Vec<_> = ViewPermission::ALL
        .into_iter()
        .filter(|p| store.can_view(*p))
        .map(|p| p.flag_name())
        .collect();
    println!("  Views:         {}", if views.is_empty() { "-".to_string() } else { views.join(", ") });
}

fn parse_user(contents: &str) -> Result<SessionUser, AppError> {
    serde_json::from_str(contents).map_err(AppError::InvalidSessionUser)
}
