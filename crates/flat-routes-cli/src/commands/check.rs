use anyhow::Result;
use colored::Colorize;
use flat_routes::FlatRoutesConfig;
use std::path::Path;

use super::load_manifest;

pub fn execute(app_dir: &Path, config: &FlatRoutesConfig) -> Result<()> {
    println!("{}", "Checking routes...".green().bold());

    let manifest = load_manifest(app_dir, config)?;
    let count = manifest
        .iter()
        .filter(|route| route.id != flat_routes::ROOT_ROUTE_ID)
        .count();

    println!("{} {} routes in {}", "✓".green(), count, app_dir.display().to_string().cyan());
    Ok(())
}
