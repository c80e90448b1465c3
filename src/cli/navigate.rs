// Navigation commands

use crate::app_data::AppData;
use crate::errors::AppError;
use crate::router::{NavigationOutcome, Router};

pub fn navigate(app_data: &AppData, path: &str, from: Option<&str>) -> Result<(), AppError> {
    let navigation = app_data.navigate(path, from)?;

    match navigation.outcome {
        NavigationOutcome::Proceed => {
            println!("✓ {} -> {} ({})", path, navigation.route.name, navigation.route.view);
        }
        NavigationOutcome::Redirect(target) => {
            let destination = navigation.destination(&app_data.router)?;
            println!(
                "↪ {} requires {}; redirected to {} ({})",
                path,
                navigation.route.requirements.describe(),
                target,
                destination.name
            );
        }
    }

    for (name, value) in navigation.params.iter() {
        println!("  {} = {}", name, value);
    }

    Ok(())
}

pub fn list_routes(router: &Router) {
    for route in router.routes() {
        let path = match route.alias {
            Some(alias) => format!("{} | {}", route.path, alias),
            None => route.path.to_string(),
        };
        println!(
            "{:<52} {:<22} {}",
            path,
            route.name,
            route.requirements.describe()
        );
    }
}
