use anyhow::Result;
use flat_routes::{format_routes, FlatRoutesConfig, RoutesFormat};
use std::path::Path;

use super::load_manifest;

pub fn execute(app_dir: &Path, config: &FlatRoutesConfig, format: RoutesFormat) -> Result<()> {
    let manifest = load_manifest(app_dir, config)?;
    println!("{}", format_routes(&manifest, format)?);
    Ok(())
}
