// File: src/config.rs
// Purpose: Route discovery settings parsed from flat-routes.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::convention::DEFAULT_ROUTES_DIR;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "flat-routes.toml";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FlatRoutesConfig {
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Where route modules live and which files to leave out
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutingConfig {
    /// App directory, relative to the project (default: "app")
    #[serde(default = "default_app_dir")]
    pub app_dir: String,

    /// Routes directory inside the app directory (default: "routes")
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,

    /// Glob patterns, relative to the routes directory, of files that are not routes
    #[serde(default)]
    pub ignored_route_files: Vec<String>,

    /// Root route module relative to the app directory (e.g. "root.tsx")
    #[serde(default)]
    pub root_route: Option<String>,
}

fn default_app_dir() -> String {
    "app".to_string()
}

fn default_routes_dir() -> String {
    DEFAULT_ROUTES_DIR.to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
            routes_dir: default_routes_dir(),
            ignored_route_files: Vec::new(),
            root_route: None,
        }
    }
}

impl FlatRoutesConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FlatRoutesConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from ./flat-routes.toml
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE_NAME)
    }
}
